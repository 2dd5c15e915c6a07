//! Wire contract for a REST-backed task store.
//!
//! No HTTP client ships with the crate. This module fixes the routes, JSON
//! documents and status-code classification a remote
//! [`TaskRepository`](crate::task::ports::TaskRepository) implementation
//! must agree on.

mod document;
mod routes;

pub use document::{
    CreateTaskBody, StatusBody, TaskDocument, UpdateTaskBody, WireError, decode_task,
    decode_task_list, encode_task,
};
pub use routes::{HttpMethod, TaskRoute, classify_status};
