//! Service layer owning the task collection.

use super::TaskValidationConfig;
use crate::task::{
    domain::{
        ParsePriorityError, Priority, Task, TaskDomainError, TaskDraft, TaskId, TaskPatch,
        TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority code (`High`, `Med` or `Low`).
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

/// Request payload for editing an existing task.
///
/// Only the fields that were set are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: TaskId,
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an empty edit for the given task.
    #[must_use]
    pub const fn new(id: TaskId) -> Self {
        Self {
            id,
            title: None,
            description: None,
            priority: None,
        }
    }

    /// Returns the targeted task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the priority code (`High`, `Med` or `Low`).
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

/// Broad classification of store failures, used to decide how the UI
/// recovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskErrorKind {
    /// Input was rejected; show an inline message.
    Validation,
    /// The targeted task no longer exists.
    NotFound,
    /// The backing store could not be reached; retry is possible.
    Unavailable,
    /// Another writer changed the task; retry is possible.
    Conflict,
    /// Any other storage failure.
    Internal,
}

/// Service-level errors for task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The priority code is not recognised.
    #[error(transparent)]
    InvalidPriority(#[from] ParsePriorityError),
    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskStoreError {
    /// Classifies the error for recovery decisions.
    #[must_use]
    pub const fn kind(&self) -> TaskErrorKind {
        match self {
            Self::Domain(_) | Self::InvalidPriority(_) => TaskErrorKind::Validation,
            Self::NotFound(_) | Self::Repository(TaskRepositoryError::NotFound(_)) => {
                TaskErrorKind::NotFound
            }
            Self::Repository(TaskRepositoryError::Unavailable(_)) => TaskErrorKind::Unavailable,
            Self::Repository(TaskRepositoryError::Conflict(_)) => TaskErrorKind::Conflict,
            Self::Repository(
                TaskRepositoryError::DuplicateTask(_) | TaskRepositoryError::Persistence(_),
            ) => TaskErrorKind::Internal,
        }
    }

    /// Returns `true` for input validation failures.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind(), TaskErrorKind::Validation)
    }

    /// Returns `true` when the targeted task does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind(), TaskErrorKind::NotFound)
    }

    /// Returns `true` when retrying the same call may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self.kind(),
            TaskErrorKind::Unavailable | TaskErrorKind::Conflict
        )
    }
}

/// Result type for task store service operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Exclusive owner and mutator of the task collection.
///
/// The service validates input, assigns identifiers and timestamps, and
/// delegates storage to the injected repository.
#[derive(Clone)]
pub struct TaskStoreService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: TaskValidationConfig,
}

impl<R, C> TaskStoreService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a store service with default validation limits.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, TaskValidationConfig::default())
    }

    /// Creates a store service with custom validation limits.
    #[must_use]
    pub const fn with_config(
        repository: Arc<R>,
        clock: Arc<C>,
        config: TaskValidationConfig,
    ) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    async fn find_task_or_error(&self, id: TaskId) -> TaskStoreResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskStoreError::NotFound(id))
    }

    fn validated_title(&self, raw: String) -> TaskStoreResult<TaskTitle> {
        let title = TaskTitle::new(raw)?;
        self.config.check_title(&title)?;
        Ok(title)
    }

    /// Creates and appends a new incomplete task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when the title is blank or a field
    /// exceeds its limit, [`TaskStoreError::InvalidPriority`] for an unknown
    /// priority code, or repository errors when persistence fails. Nothing is
    /// stored on failure.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskStoreResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            priority,
        } = request;

        let mut draft = TaskDraft::new(self.validated_title(title)?);
        if let Some(text) = description {
            self.config.check_description(&text)?;
            draft = draft.with_description(text);
        }
        if let Some(code) = priority {
            draft = draft.with_priority(Priority::try_from(code.as_str())?);
        }

        let id = self.repository.next_id().await?;
        let task = Task::new(id, draft, &*self.clock);
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), priority = %task.priority(), "task created");
        Ok(task)
    }

    /// Applies the supplied fields to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has the given ID,
    /// before any field is validated. Returns validation errors when a
    /// supplied field is invalid, or repository errors when persistence
    /// fails. The stored task is unchanged on failure.
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskStoreResult<Task> {
        let UpdateTaskRequest {
            id,
            title,
            description,
            priority,
        } = request;

        let mut task = self.find_task_or_error(id).await?;
        let patch = TaskPatch {
            title: title.map(|raw| self.validated_title(raw)).transpose()?,
            description: description
                .map(|text| self.config.check_description(&text).map(|()| text))
                .transpose()?,
            priority: priority
                .map(|code| Priority::try_from(code.as_str()))
                .transpose()?,
        };

        if patch.is_empty() {
            return Ok(task);
        }
        task.apply(patch);
        self.repository.update(&task).await?;
        info!(task_id = %id, "task updated");
        Ok(task)
    }

    /// Flips the completion flag of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has the given ID, or
    /// repository errors when persistence fails.
    pub async fn toggle_status(&self, id: TaskId) -> TaskStoreResult<Task> {
        let mut task = self.find_task_or_error(id).await?;
        task.toggle_status();
        self.repository.update(&task).await?;
        debug!(task_id = %id, completed = task.is_completed(), "task status toggled");
        Ok(task)
    }

    /// Removes a task.
    ///
    /// Deletion is strict: removing an unknown or already removed task is an
    /// error rather than a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] wrapping
    /// [`TaskRepositoryError::NotFound`] when no task has the given ID, or
    /// other repository errors when persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        self.repository.delete(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns repository errors when the lookup fails.
    pub async fn find(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns a snapshot of all tasks in insertion order.
    ///
    /// # Errors
    ///
    /// Returns repository errors when the listing fails.
    pub async fn list(&self) -> TaskStoreResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }
}
