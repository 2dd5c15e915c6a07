//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    board::TaskBoard,
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::Task,
        services::{CreateTaskRequest, TaskStoreService},
    },
};

/// Store service type used by the integration tests.
pub type TestStore = TaskStoreService<InMemoryTaskRepository, DefaultClock>;

/// Board type used by the integration tests.
pub type TestBoard = TaskBoard<InMemoryTaskRepository, DefaultClock>;

/// Provides a fresh store for each test.
#[fixture]
pub fn store() -> TestStore {
    TaskStoreService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Provides a board over a fresh store.
#[fixture]
pub fn board(store: TestStore) -> TestBoard {
    TaskBoard::new(store)
}

/// Creates the four sample tasks shown on a fresh board.
///
/// # Errors
///
/// Returns an error if any creation fails.
pub async fn seed_sample_tasks(store: &TestStore) -> Result<Vec<Task>, eyre::Report> {
    let requests = [
        CreateTaskRequest::new("Design the new landing page").with_priority("High"),
        CreateTaskRequest::new("Develop the authentication flow").with_priority("High"),
        CreateTaskRequest::new("Review team pull requests").with_priority("Med"),
        CreateTaskRequest::new("Update the documentation").with_priority("Low"),
    ];
    let mut created = Vec::with_capacity(requests.len());
    for request in requests {
        created.push(store.create(request).await?);
    }
    Ok(created)
}
