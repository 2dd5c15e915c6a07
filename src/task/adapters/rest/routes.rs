//! Route table mapping store operations onto HTTP endpoints.

use crate::task::{domain::TaskId, ports::TaskRepositoryError};
use std::fmt;

/// HTTP methods used by the task API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Returns the method token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Endpoint for each task store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskRoute {
    /// `GET /tasks`
    List,
    /// `POST /tasks` with a [`CreateTaskBody`](super::CreateTaskBody).
    Create,
    /// `PATCH /tasks/{id}` with an [`UpdateTaskBody`](super::UpdateTaskBody).
    Update(TaskId),
    /// `PATCH /tasks/{id}` with a [`StatusBody`](super::StatusBody).
    ToggleStatus(TaskId),
    /// `DELETE /tasks/{id}`
    Delete(TaskId),
}

impl TaskRoute {
    const COLLECTION: &'static str = "/tasks";

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(self) -> HttpMethod {
        match self {
            Self::List => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update(_) | Self::ToggleStatus(_) => HttpMethod::Patch,
            Self::Delete(_) => HttpMethod::Delete,
        }
    }

    /// Returns the request path relative to the API root.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::List | Self::Create => Self::COLLECTION.to_owned(),
            Self::Update(id) | Self::ToggleStatus(id) | Self::Delete(id) => {
                format!("{}/{id}", Self::COLLECTION)
            }
        }
    }

    /// Returns the task targeted by the route, if any.
    #[must_use]
    pub const fn task_id(self) -> Option<TaskId> {
        match self {
            Self::List | Self::Create => None,
            Self::Update(id) | Self::ToggleStatus(id) | Self::Delete(id) => Some(id),
        }
    }
}

impl fmt::Display for TaskRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

/// Maps a non-success HTTP status for `route` onto a repository error.
///
/// Returns `None` for 2xx statuses.
#[must_use]
pub fn classify_status(route: TaskRoute, status: u16) -> Option<TaskRepositoryError> {
    if (200..300).contains(&status) {
        return None;
    }
    let error = match (status, route.task_id()) {
        (404, Some(id)) => TaskRepositoryError::NotFound(id),
        (409, Some(id)) => TaskRepositoryError::Conflict(id),
        (408 | 429 | 500..=599, _) => {
            TaskRepositoryError::unavailable(std::io::Error::other(format!(
                "{route} returned HTTP {status}"
            )))
        }
        _ => TaskRepositoryError::persistence(std::io::Error::other(format!(
            "{route} returned HTTP {status}"
        ))),
    };
    Some(error)
}
