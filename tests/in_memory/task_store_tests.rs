//! In-memory integration tests for task store operations.

use super::helpers::{TestStore, seed_sample_tasks, store};
use rstest::rstest;
use taskboard::{
    board::group_by_priority,
    task::{
        domain::Priority,
        services::{CreateTaskRequest, TaskErrorKind, UpdateTaskRequest},
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sample_tasks_group_into_columns(store: TestStore) -> Result<(), eyre::Report> {
    let created = seed_sample_tasks(&store).await?;
    let tasks = store.list().await?;
    eyre::ensure!(tasks == created, "list should return tasks in creation order");

    let buckets = group_by_priority(&tasks);
    eyre::ensure!(buckets.high.len() == 2, "expected two high priority tasks");
    eyre::ensure!(buckets.medium.len() == 1, "expected one medium priority task");
    eyre::ensure!(buckets.low.len() == 1, "expected one low priority task");
    eyre::ensure!(buckets.len() == tasks.len(), "buckets must cover every task");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_ids_never_reappear(store: TestStore) -> Result<(), eyre::Report> {
    let created = seed_sample_tasks(&store).await?;
    let removed = created
        .get(1)
        .ok_or_else(|| eyre::eyre!("expected a second sample task"))?
        .id();

    store.delete(removed).await?;
    let replacement = store
        .create(CreateTaskRequest::new("Replacement").with_priority("High"))
        .await?;

    eyre::ensure!(replacement.id() != removed, "deleted id was reissued");
    let tasks = store.list().await?;
    eyre::ensure!(
        tasks.iter().all(|task| task.id() != removed),
        "deleted task is still listed"
    );
    eyre::ensure!(tasks.len() == created.len(), "task count mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_keeps_position_identity_and_timestamp(
    store: TestStore,
) -> Result<(), eyre::Report> {
    let created = seed_sample_tasks(&store).await?;
    let target = created
        .get(2)
        .ok_or_else(|| eyre::eyre!("expected a third sample task"))?;

    let updated = store
        .update(
            UpdateTaskRequest::new(target.id())
                .with_title("Review all pull requests")
                .with_priority("High"),
        )
        .await?;

    eyre::ensure!(updated.id() == target.id(), "id changed");
    eyre::ensure!(updated.created_at() == target.created_at(), "createdAt changed");
    eyre::ensure!(updated.priority() == Priority::High, "priority not applied");
    let tasks = store.list().await?;
    let position = tasks.iter().position(|task| task.id() == target.id());
    eyre::ensure!(position == Some(2), "update moved the task");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_priority_is_a_validation_error(store: TestStore) -> Result<(), eyre::Report> {
    let Err(err) = store
        .create(CreateTaskRequest::new("Lowercase").with_priority("low"))
        .await
    else {
        eyre::bail!("lowercase priority code should be rejected");
    };
    eyre::ensure!(err.kind() == TaskErrorKind::Validation, "unexpected kind {err:?}");
    eyre::ensure!(store.list().await?.is_empty(), "store should be unchanged");
    Ok(())
}
