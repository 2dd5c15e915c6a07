//! Task storage for the task board.
//!
//! This module owns the canonical task collection: creating tasks with
//! store-assigned identifiers, editing their fields, toggling completion and
//! deleting them. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
