//! View projection for the task board.
//!
//! The board is a read-only consumer of the task store. It partitions the
//! store's snapshot into priority columns, runs the add/edit modal workflow,
//! and routes UI events to [`TaskStoreService`](crate::task::services::TaskStoreService).
//!
//! - Priority grouping in [`projection`]
//! - Modal state machine in [`modal`]
//! - Event wiring and sync status in [`session`]

pub mod modal;
pub mod projection;
pub mod session;

pub use modal::{ModalError, ModalState, ModalSubmission, TaskForm, TaskModal};
pub use projection::{PriorityBuckets, TaskCard, created_at_label, group_by_priority};
pub use session::{SyncStatus, TaskBoard, TaskBoardError, TaskBoardResult};

#[cfg(test)]
mod tests;
