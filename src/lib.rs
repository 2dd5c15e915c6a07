//! Taskboard: single-user task tracking core.
//!
//! This crate provides the state-management model behind a task board: a
//! task store that owns the canonical task collection, and a view projection
//! that groups tasks by priority and drives the add/edit modal.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, REST wire format)
//!
//! # Modules
//!
//! - [`task`]: Task entity, store operations and persistence ports
//! - [`board`]: Priority grouping, modal workflow and UI event wiring

pub mod board;
pub mod task;
