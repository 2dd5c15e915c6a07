//! Application services for task storage orchestration.

mod config;
mod store;

pub use config::TaskValidationConfig;
pub use store::{
    CreateTaskRequest, TaskErrorKind, TaskStoreError, TaskStoreResult, TaskStoreService,
    UpdateTaskRequest,
};
