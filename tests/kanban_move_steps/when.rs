//! When steps for kanban move BDD scenarios.

use super::world::{KanbanWorld, parse_status, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::task::domain::{ColumnSlot, MoveInstruction};

#[when(
    r#"the task at "{from}" index {from_index:u64} is dropped on "{to}" index {to_index:u64}"#
)]
fn drop_task(
    world: &mut KanbanWorld,
    from: String,
    from_index: u64,
    to: String,
    to_index: u64,
) -> Result<(), eyre::Report> {
    let instruction = MoveInstruction::new(
        ColumnSlot::new(parse_status(&from)?, usize::try_from(from_index)?),
        ColumnSlot::new(parse_status(&to)?, usize::try_from(to_index)?),
    );

    let board = run_async(world.service.load_board(KanbanWorld::query()?))
        .wrap_err("load board for move scenario")?;
    let outcome = run_async(world.service.move_task(board, instruction));
    world.last_outcome = Some(outcome);
    Ok(())
}
