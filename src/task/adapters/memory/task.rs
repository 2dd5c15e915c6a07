//! In-memory task repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks are kept in a vector so iteration follows insertion order. Cloning
/// the repository shares the underlying state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    last_issued_id: u64,
}

impl InMemoryTaskState {
    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn next_id(&self) -> TaskRepositoryResult<TaskId> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.last_issued_id = state
            .last_issued_id
            .checked_add(1)
            .ok_or_else(|| poisoned("task identifier space exhausted"))?;
        Ok(TaskId::new(state.last_issued_id))
    }

    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.position(task.id()).is_some() {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        // Tasks stored with externally chosen ids must not be reissued later.
        state.last_issued_id = state.last_issued_id.max(task.id().value());
        state.tasks.push(task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let slot = state
            .tasks
            .iter_mut()
            .find(|stored| stored.id() == task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let index = state
            .position(id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        state.tasks.remove(index);
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.clone())
    }
}
