//! In-memory integration tests for board workflows.

use super::helpers::{TestBoard, board, seed_sample_tasks};
use rstest::rstest;
use taskboard::{
    board::{ModalState, SyncStatus},
    task::domain::Priority,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_shows_seeded_tasks_after_refresh(mut board: TestBoard) -> Result<(), eyre::Report> {
    seed_sample_tasks(board.store()).await?;
    board.refresh().await?;

    let cards = board.cards();
    let high = cards
        .first()
        .ok_or_else(|| eyre::eyre!("missing high column"))?;
    eyre::ensure!(high.0 == Priority::High, "first column should be high priority");
    let titles: Vec<&str> = high.1.iter().map(|card| card.title.as_str()).collect();
    eyre::ensure!(
        titles == ["Design the new landing page", "Develop the authentication flow"],
        "unexpected high column {titles:?}"
    );
    eyre::ensure!(board.sync_status() == &SyncStatus::Idle, "board should be idle");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_edit_toggle_delete_round_trip(mut board: TestBoard) -> Result<(), eyre::Report> {
    board.open_add()?;
    board.modal_mut().set_title("Plan sprint");
    board.modal_mut().set_description("Pick stories");
    let created = board
        .save()
        .await?
        .ok_or_else(|| eyre::eyre!("task should be created"))?;
    eyre::ensure!(created.priority() == Priority::Low, "default priority should be low");

    eyre::ensure!(board.open_edit(created.id()).await?, "edit modal should open");
    eyre::ensure!(
        matches!(board.modal().state(), ModalState::Editing(task) if task.id() == created.id()),
        "modal should target the created task"
    );
    board.modal_mut().set_priority(Priority::High);
    board.save().await?;

    board.toggle_status(created.id()).await?;
    let task = board
        .buckets()
        .high
        .first()
        .map(|task| (*task).clone())
        .ok_or_else(|| eyre::eyre!("task should be in the high column"))?;
    eyre::ensure!(task.is_completed(), "task should be completed");
    eyre::ensure!(task.created_at() == created.created_at(), "createdAt changed");

    board.delete(created.id()).await?;
    eyre::ensure!(board.tasks().is_empty(), "board should be empty");
    Ok(())
}
