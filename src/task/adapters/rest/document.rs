//! JSON documents exchanged with the task API.

use crate::task::domain::{
    PersistedTaskData, Priority, Task, TaskDomainError, TaskDraft, TaskId, TaskPatch, TaskTitle,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while encoding or decoding wire documents.
#[derive(Debug, Error)]
pub enum WireError {
    /// The payload is not valid JSON for the expected shape.
    #[error("malformed task document: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload parsed but violates a task invariant.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

/// Task as serialized on the wire.
///
/// ```json
/// {"id":1,"title":"Write spec","description":"","priority":"High",
///  "status":false,"createdAt":"2025-07-19T10:00:00Z"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDocument {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
    /// Priority code.
    pub priority: Priority,
    /// Completion flag.
    pub status: bool,
    /// Creation timestamp in RFC 3339 form.
    pub created_at: DateTime<Utc>,
}

impl From<&Task> for TaskDocument {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority(),
            status: task.is_completed(),
            created_at: task.created_at(),
        }
    }
}

impl TryFrom<TaskDocument> for Task {
    type Error = TaskDomainError;

    fn try_from(document: TaskDocument) -> Result<Self, Self::Error> {
        Ok(Self::from_persisted(PersistedTaskData {
            id: document.id,
            title: TaskTitle::new(document.title)?,
            description: document.description,
            priority: document.priority,
            completed: document.status,
            created_at: document.created_at,
        }))
    }
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskBody {
    /// Task title.
    pub title: String,
    /// Task description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Priority code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl From<&TaskDraft> for CreateTaskBody {
    fn from(draft: &TaskDraft) -> Self {
        Self {
            title: draft.title().as_str().to_owned(),
            description: Some(draft.description().to_owned()),
            priority: Some(draft.priority()),
        }
    }
}

/// Body of `PATCH /tasks/{id}` for field edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement priority code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl From<&TaskPatch> for UpdateTaskBody {
    fn from(patch: &TaskPatch) -> Self {
        Self {
            title: patch.title.as_ref().map(|title| title.as_str().to_owned()),
            description: patch.description.clone(),
            priority: patch.priority,
        }
    }
}

/// Body of `PATCH /tasks/{id}` for status changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBody {
    /// New completion flag.
    pub status: bool,
}

impl From<&Task> for StatusBody {
    fn from(task: &Task) -> Self {
        Self {
            status: task.is_completed(),
        }
    }
}

/// Serializes a task into its JSON document.
///
/// # Errors
///
/// Returns [`WireError::Json`] if serialization fails.
pub fn encode_task(task: &Task) -> Result<String, WireError> {
    Ok(serde_json::to_string(&TaskDocument::from(task))?)
}

/// Parses a single JSON task document.
///
/// # Errors
///
/// Returns [`WireError::Json`] for malformed JSON or unknown priority codes
/// and [`WireError::Domain`] for a blank title.
pub fn decode_task(payload: &str) -> Result<Task, WireError> {
    let document: TaskDocument = serde_json::from_str(payload)?;
    Ok(Task::try_from(document)?)
}

/// Parses the JSON array returned by `GET /tasks`, keeping its order.
///
/// # Errors
///
/// Returns the first [`WireError`] encountered.
pub fn decode_task_list(payload: &str) -> Result<Vec<Task>, WireError> {
    let documents: Vec<TaskDocument> = serde_json::from_str(payload)?;
    documents
        .into_iter()
        .map(|document| Task::try_from(document).map_err(WireError::from))
        .collect()
}
