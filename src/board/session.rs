//! Board session wiring UI events to the task store.

use super::{
    modal::{ModalError, ModalSubmission, TaskModal},
    projection::{PriorityBuckets, TaskCard, group_by_priority},
};
use crate::task::{
    domain::{Priority, Task, TaskId},
    ports::TaskRepository,
    services::{TaskStoreError, TaskStoreResult, TaskStoreService},
};
use mockable::Clock;
use thiserror::Error;
use tracing::{debug, warn};

/// Progress of the most recent store call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SyncStatus {
    /// No call is in flight and the last one succeeded.
    #[default]
    Idle,
    /// A store call is in flight.
    Pending,
    /// The last store call failed with the given message.
    Failed(String),
}

/// Errors surfaced by board actions.
///
/// Validation and not-found failures are handled inside the board and never
/// appear here.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// The modal refused the transition.
    #[error(transparent)]
    Modal(#[from] ModalError),
    /// The store failed in a way the board cannot absorb.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for board actions.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// A single user's task board.
///
/// The board holds the latest snapshot of the store, which it refreshes after
/// each mutation, and the modal workflow. It never edits a task directly.
pub struct TaskBoard<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    store: TaskStoreService<R, C>,
    tasks: Vec<Task>,
    modal: TaskModal,
    sync: SyncStatus,
}

impl<R, C> TaskBoard<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a board with an empty snapshot. Call [`Self::refresh`] to load
    /// the store contents.
    #[must_use]
    pub fn new(store: TaskStoreService<R, C>) -> Self {
        Self {
            store,
            tasks: Vec::new(),
            modal: TaskModal::new(),
            sync: SyncStatus::Idle,
        }
    }

    /// Returns the store service.
    #[must_use]
    pub const fn store(&self) -> &TaskStoreService<R, C> {
        &self.store
    }

    /// Returns the latest task snapshot in store order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the snapshot grouped by priority.
    #[must_use]
    pub fn buckets(&self) -> PriorityBuckets<'_> {
        group_by_priority(&self.tasks)
    }

    /// Returns card data per column, in display order.
    #[must_use]
    pub fn cards(&self) -> Vec<(Priority, Vec<TaskCard>)> {
        self.buckets()
            .columns()
            .map(|(priority, tasks)| {
                let cards = tasks.iter().map(|task| TaskCard::from(*task)).collect();
                (priority, cards)
            })
            .collect()
    }

    /// Returns the modal.
    #[must_use]
    pub const fn modal(&self) -> &TaskModal {
        &self.modal
    }

    /// Returns the modal for editing form fields.
    pub const fn modal_mut(&mut self) -> &mut TaskModal {
        &mut self.modal
    }

    /// Returns the sync status of the last store call.
    #[must_use]
    pub const fn sync_status(&self) -> &SyncStatus {
        &self.sync
    }

    fn record<T>(&mut self, result: TaskStoreResult<T>) -> TaskStoreResult<T> {
        self.sync = match &result {
            Ok(_) => SyncStatus::Idle,
            Err(err) if err.is_validation() || err.is_not_found() => SyncStatus::Idle,
            Err(err) => SyncStatus::Failed(err.to_string()),
        };
        result
    }

    /// Reloads the snapshot from the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Store`] when listing fails; the previous
    /// snapshot is kept.
    pub async fn refresh(&mut self) -> TaskBoardResult<()> {
        self.sync = SyncStatus::Pending;
        let result = self.store.list().await;
        let tasks = self.record(result)?;
        debug!(count = tasks.len(), "board snapshot refreshed");
        self.tasks = tasks;
        Ok(())
    }

    /// Opens the modal for a new task.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::AlreadyOpen`] while the modal is open.
    pub fn open_add(&mut self) -> TaskBoardResult<()> {
        Ok(self.modal.open_add()?)
    }

    /// Opens the modal prefilled with the task `id`.
    ///
    /// Returns `Ok(false)` without opening anything when the task is not in
    /// the store any more.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::AlreadyOpen`] while the modal is open, or store
    /// errors when the lookup fails.
    pub async fn open_edit(&mut self, id: TaskId) -> TaskBoardResult<bool> {
        if self.modal.is_open() {
            return Err(ModalError::AlreadyOpen.into());
        }
        self.sync = SyncStatus::Pending;
        let result = self.store.find(id).await;
        let Some(task) = self.record(result)? else {
            warn!(task_id = %id, "edit requested for a missing task");
            self.refresh().await?;
            return Ok(false);
        };
        self.modal.open_edit(&task)?;
        Ok(true)
    }

    /// Discards the modal's form without touching the store.
    pub fn cancel(&mut self) {
        self.modal.cancel();
    }

    /// Submits the modal.
    ///
    /// Returns `Ok(Some(task))` when the store accepted the change and the
    /// modal closed. If the follow-up refresh fails, the saved task is
    /// placed into the current snapshot and the failure only shows in
    /// [`Self::sync_status`]. Returns `Ok(None)` when validation failed,
    /// with the modal left open showing the message, or when the edited
    /// task has disappeared, in which case the modal is closed.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::NotOpen`] when the modal is closed. Returns
    /// [`TaskBoardError::Store`] when the store rejects the create or
    /// update; the modal stays open with the user's input so the save can
    /// be retried.
    pub async fn save(&mut self) -> TaskBoardResult<Option<Task>> {
        let submission = match self.modal.submit() {
            Ok(submission) => submission,
            Err(ModalError::BlankTitle) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        self.sync = SyncStatus::Pending;
        let result = match submission {
            ModalSubmission::Create(request) => self.store.create(request).await,
            ModalSubmission::Update(request) => {
                debug!(task_id = %request.id(), "saving task edit");
                self.store.update(request).await
            }
        };

        match self.record(result) {
            Ok(task) => {
                self.modal.complete();
                if let Err(err) = self.refresh().await {
                    warn!(
                        task_id = %task.id(),
                        error = %err,
                        "snapshot refresh failed after save"
                    );
                    self.splice(&task);
                }
                Ok(Some(task))
            }
            Err(err) if err.is_validation() => {
                warn!(error = %err, "task save rejected");
                self.modal.reject(err.to_string());
                Ok(None)
            }
            Err(err) if err.is_not_found() => {
                warn!(error = %err, "edited task no longer exists");
                self.modal.cancel();
                self.refresh().await?;
                Ok(None)
            }
            Err(err) => {
                warn!(error = %err, "task save failed");
                self.modal.reject(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Flips the completion flag of task `id`.
    ///
    /// A missing task is logged and ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Store`] for storage failures other than a
    /// missing task.
    pub async fn toggle_status(&mut self, id: TaskId) -> TaskBoardResult<()> {
        self.sync = SyncStatus::Pending;
        let result = self.store.toggle_status(id).await;
        self.absorb_not_found(id, result.map(drop)).await
    }

    /// Deletes task `id`.
    ///
    /// A missing task is logged and ignored, so repeated deletes are
    /// harmless at this level.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Store`] for storage failures other than a
    /// missing task.
    pub async fn delete(&mut self, id: TaskId) -> TaskBoardResult<()> {
        self.sync = SyncStatus::Pending;
        let result = self.store.delete(id).await;
        self.absorb_not_found(id, result).await
    }

    fn splice(&mut self, task: &Task) {
        match self.tasks.iter_mut().find(|held| held.id() == task.id()) {
            Some(held) => held.clone_from(task),
            None => self.tasks.push(task.clone()),
        }
    }

    async fn absorb_not_found(
        &mut self,
        id: TaskId,
        result: TaskStoreResult<()>,
    ) -> TaskBoardResult<()> {
        match self.record(result) {
            Ok(()) => {}
            Err(err) if err.is_not_found() => {
                warn!(task_id = %id, "ignoring action on a missing task");
            }
            Err(err) => return Err(err.into()),
        }
        self.refresh().await
    }
}
