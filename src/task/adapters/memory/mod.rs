//! In-memory adapters for tests and process-local sessions.

mod task;

pub use task::InMemoryTaskRepository;
