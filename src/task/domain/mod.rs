//! Domain model for the task tracker.
//!
//! The task domain models task creation, field edits and completion toggling
//! while keeping storage and presentation concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod priority;
mod task;

pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use priority::Priority;
pub use task::{PersistedTaskData, Task, TaskDraft, TaskPatch};
