//! Task aggregate root and the value objects used to create and edit it.

use super::{Priority, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Validated field values for a task that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: TaskTitle,
    description: String,
    priority: Priority,
}

impl TaskDraft {
    /// Creates a draft with an empty description and [`Priority::Low`].
    #[must_use]
    pub fn new(title: TaskTitle) -> Self {
        Self {
            title,
            description: String::new(),
            priority: Priority::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the draft title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the draft description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the draft priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }
}

/// Partial edit of a stored task. Fields left as `None` are not changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement priority.
    pub priority: Option<Priority>,
}

impl TaskPatch {
    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.priority.is_none()
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    priority: Priority,
    completed: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: String,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new incomplete task stamped with the current clock time.
    #[must_use]
    pub fn new(id: TaskId, draft: TaskDraft, clock: &impl Clock) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            completed: false,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            completed: data.completed,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, which may be empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns `true` once the task has been marked complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies the supplied fields of `patch`.
    ///
    /// The identifier, creation timestamp and completion flag are never
    /// touched.
    pub fn apply(&mut self, patch: TaskPatch) {
        let TaskPatch {
            title,
            description,
            priority,
        } = patch;
        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        if let Some(new_priority) = priority {
            self.priority = new_priority;
        }
    }

    /// Flips the completion flag.
    pub const fn toggle_status(&mut self) {
        self.completed = !self.completed;
    }
}
