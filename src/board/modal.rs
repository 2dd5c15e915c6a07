//! Add/edit modal state machine.
//!
//! ```text
//! Closed --open_add--------> Adding
//! Closed --open_edit(task)-> Editing(task)
//! Adding --submit(valid)---> (store create)  --complete--> Closed
//! Editing --submit(valid)--> (store update)  --complete--> Closed
//! Adding | Editing --cancel--> Closed
//! ```
//!
//! A blank title keeps the modal in its current state. The modal never talks
//! to the store itself; [`TaskModal::submit`] hands back the request the
//! caller should execute.

use crate::task::{
    domain::{Priority, Task},
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use thiserror::Error;

/// Inline message shown when the title field is blank.
pub const BLANK_TITLE_MESSAGE: &str = "Title cannot be empty";

/// Where the modal currently is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    /// No modal is shown.
    #[default]
    Closed,
    /// The modal is collecting a new task.
    Adding,
    /// The modal is editing a snapshot of an existing task.
    Editing(Box<Task>),
}

/// Editable form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    /// Title input.
    pub title: String,
    /// Description input.
    pub description: String,
    /// Priority selector, [`Priority::Low`] by default.
    pub priority: Priority,
}

impl TaskForm {
    fn prefilled(task: &Task) -> Self {
        Self {
            title: task.title().to_string(),
            description: task.description().to_owned(),
            priority: task.priority(),
        }
    }

    fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// Store call requested by a valid submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalSubmission {
    /// Submit from [`ModalState::Adding`].
    Create(CreateTaskRequest),
    /// Submit from [`ModalState::Editing`].
    Update(UpdateTaskRequest),
}

/// Transitions the modal refuses.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ModalError {
    /// An open request arrived while the modal was already open.
    #[error("the task modal is already open")]
    AlreadyOpen,
    /// A submit arrived while the modal was closed.
    #[error("the task modal is not open")]
    NotOpen,
    /// The title field is blank.
    #[error("task title must not be empty")]
    BlankTitle,
}

/// Modal workflow state plus the form it edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskModal {
    state: ModalState,
    form: TaskForm,
    error_message: Option<String>,
}

impl TaskModal {
    /// Creates a closed modal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &ModalState {
        &self.state
    }

    /// Returns `true` while adding or editing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self.state, ModalState::Closed)
    }

    /// Returns the form fields.
    #[must_use]
    pub const fn form(&self) -> &TaskForm {
        &self.form
    }

    /// Returns the inline error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Sets the title input.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    /// Sets the description input.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
    }

    /// Sets the priority selector.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.form.priority = priority;
    }

    /// Opens the modal for a new task with a cleared form.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::AlreadyOpen`] unless the modal is closed.
    pub fn open_add(&mut self) -> Result<(), ModalError> {
        self.ensure_closed()?;
        self.state = ModalState::Adding;
        self.form = TaskForm::default();
        self.error_message = None;
        Ok(())
    }

    /// Opens the modal prefilled from `task`.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::AlreadyOpen`] unless the modal is closed.
    pub fn open_edit(&mut self, task: &Task) -> Result<(), ModalError> {
        self.ensure_closed()?;
        self.form = TaskForm::prefilled(task);
        self.state = ModalState::Editing(Box::new(task.clone()));
        self.error_message = None;
        Ok(())
    }

    /// Validates the form and returns the store call to make.
    ///
    /// The modal stays open; call [`Self::complete`] once the store accepts
    /// the change or [`Self::reject`] when it does not.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::NotOpen`] when closed and
    /// [`ModalError::BlankTitle`] when the title is blank. A blank title also
    /// sets the inline error message.
    pub fn submit(&mut self) -> Result<ModalSubmission, ModalError> {
        let submission = match &self.state {
            ModalState::Closed => return Err(ModalError::NotOpen),
            _ if !self.form.has_title() => {
                self.error_message = Some(BLANK_TITLE_MESSAGE.to_owned());
                return Err(ModalError::BlankTitle);
            }
            ModalState::Adding => ModalSubmission::Create(
                CreateTaskRequest::new(self.form.title.clone())
                    .with_description(self.form.description.clone())
                    .with_priority(self.form.priority.as_str()),
            ),
            ModalState::Editing(task) => ModalSubmission::Update(
                UpdateTaskRequest::new(task.id())
                    .with_title(self.form.title.clone())
                    .with_description(self.form.description.clone())
                    .with_priority(self.form.priority.as_str()),
            ),
        };
        self.error_message = None;
        Ok(submission)
    }

    /// Closes the modal after the store accepted the submission.
    pub fn complete(&mut self) {
        self.close();
    }

    /// Keeps the modal open with the user's input and shows `message`.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Discards the form and closes the modal. Closing a closed modal does
    /// nothing.
    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.state = ModalState::Closed;
        self.form = TaskForm::default();
        self.error_message = None;
    }

    const fn ensure_closed(&self) -> Result<(), ModalError> {
        if self.is_open() {
            return Err(ModalError::AlreadyOpen);
        }
        Ok(())
    }
}
