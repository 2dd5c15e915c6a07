//! Unit tests for the board view projection.
