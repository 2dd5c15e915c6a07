//! Given steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, add_task, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty task board")]
fn empty_task_board(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    run_async(world.board.refresh()).wrap_err("load empty board")?;
    if !world.board.tasks().is_empty() {
        return Err(eyre::eyre!("expected an empty board"));
    }
    Ok(())
}

#[given(r#"a board with a task titled "{title}" with priority "{priority}""#)]
fn board_with_task(
    world: &mut TaskBoardWorld,
    title: String,
    priority: String,
) -> Result<(), eyre::Report> {
    add_task(world, &title, &priority).wrap_err("seed task for scenario")
}
