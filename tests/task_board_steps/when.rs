//! When steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, add_task, run_async};
use rstest_bdd_macros::when;
use taskboard::task::domain::Priority;

#[when(r#"the user adds a task titled "{title}" with priority "{priority}""#)]
fn user_adds_task(
    world: &mut TaskBoardWorld,
    title: String,
    priority: String,
) -> Result<(), eyre::Report> {
    add_task(world, &title, &priority)
}

#[when("the user submits the add form with a blank title")]
fn user_submits_blank_title(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    world.board.open_add()?;
    world.board.modal_mut().set_title("   ");
    if run_async(world.board.save())?.is_some() {
        return Err(eyre::eyre!("blank title should not be saved"));
    }
    Ok(())
}

#[when("the user opens the add modal")]
fn user_opens_add_modal(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    world.board.open_add()?;
    world.board.modal_mut().set_title("Discard me");
    Ok(())
}

#[when("the user cancels the modal")]
fn user_cancels_modal(world: &mut TaskBoardWorld) {
    world.board.cancel();
}

#[when("the user toggles the status of the last task")]
fn user_toggles_last_task(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    let id = world.last_task_id()?;
    run_async(world.board.toggle_status(id))?;
    Ok(())
}

#[when(r#"the user edits the last task to priority "{priority}""#)]
fn user_edits_priority(world: &mut TaskBoardWorld, priority: String) -> Result<(), eyre::Report> {
    let id = world.last_task_id()?;
    let parsed = Priority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    if !run_async(world.board.open_edit(id))? {
        return Err(eyre::eyre!("edit modal did not open"));
    }
    world.board.modal_mut().set_priority(parsed);
    run_async(world.board.save())?;
    Ok(())
}

#[when("the user deletes the last task")]
fn user_deletes_last_task(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    let id = world.last_task_id()?;
    run_async(world.board.delete(id))?;
    Ok(())
}

#[when("the user deletes the same task again")]
fn user_deletes_same_task_again(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    let id = world.last_task_id()?;
    run_async(world.board.delete(id))?;
    Ok(())
}
