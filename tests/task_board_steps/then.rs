//! Then steps for task board BDD scenarios.

use super::world::TaskBoardWorld;
use rstest_bdd_macros::then;
use taskboard::{board::ModalState, task::domain::Priority};

#[then("the task count is {count:usize}")]
fn task_count_is(world: &TaskBoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.board.tasks().len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks, found {actual}"));
    }
    Ok(())
}

#[then("the last task is completed")]
fn last_task_is_completed(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let id = world.last_task_id()?;
    let task = world
        .board
        .tasks()
        .iter()
        .find(|task| task.id() == id)
        .ok_or_else(|| eyre::eyre!("task {id} missing from board"))?;
    if !task.is_completed() {
        return Err(eyre::eyre!("task {id} is not completed"));
    }
    Ok(())
}

#[then(r#"the "{priority}" column has {count:usize} entries"#)]
fn column_has_entries(
    world: &TaskBoardWorld,
    priority: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let parsed = Priority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    let actual = world.board.buckets().bucket(parsed).len();
    if actual != count {
        return Err(eyre::eyre!(
            "expected {count} {} tasks, found {actual}",
            parsed.heading()
        ));
    }
    Ok(())
}

#[then("the modal is still adding")]
fn modal_is_still_adding(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    if world.board.modal().state() != &ModalState::Adding {
        return Err(eyre::eyre!(
            "expected the add modal, found {:?}",
            world.board.modal().state()
        ));
    }
    if world.board.modal().error_message().is_none() {
        return Err(eyre::eyre!("expected an inline error message"));
    }
    Ok(())
}

#[then("the modal is closed")]
fn modal_is_closed(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    if world.board.modal().is_open() {
        return Err(eyre::eyre!(
            "expected a closed modal, found {:?}",
            world.board.modal().state()
        ));
    }
    Ok(())
}
