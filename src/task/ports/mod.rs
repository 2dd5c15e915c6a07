//! Port contracts for task storage.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

mod repository;

#[cfg(test)]
pub(crate) use repository::MockTaskRepository;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
