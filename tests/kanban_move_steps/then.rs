//! Then steps for kanban move BDD scenarios.

use super::world::{KanbanWorld, parse_status};
use rstest_bdd_macros::then;
use taskboard::task::services::PersistenceStatus;

fn column_ids(world: &KanbanWorld, status: &str) -> Result<Vec<String>, eyre::Report> {
    let outcome = world.outcome()?;
    Ok(outcome
        .board
        .board()
        .column(parse_status(status)?)
        .iter()
        .map(|task| task.id().to_string())
        .collect())
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

#[then(r#"column "{status}" lists "{expected}""#)]
fn column_lists(world: &KanbanWorld, status: String, expected: String) -> Result<(), eyre::Report> {
    let actual = column_ids(world, &status)?;
    let wanted = split_list(&expected);
    eyre::ensure!(
        actual == wanted,
        "column {status}: expected {wanted:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"column "{status}" is empty"#)]
fn column_is_empty(world: &KanbanWorld, status: String) -> Result<(), eyre::Report> {
    let actual = column_ids(world, &status)?;
    eyre::ensure!(actual.is_empty(), "column {status} holds {actual:?}");
    Ok(())
}

#[then(r#"the update batch is "{expected}""#)]
fn update_batch_is(world: &KanbanWorld, expected: String) -> Result<(), eyre::Report> {
    let actual: Vec<String> = world
        .outcome()?
        .updates
        .iter()
        .map(|entry| format!("{}:{}:{}", entry.id, entry.status, entry.position))
        .collect();
    let wanted = split_list(&expected);
    eyre::ensure!(
        actual == wanted,
        "expected batch {wanted:?}, found {actual:?}"
    );
    Ok(())
}

#[then("the update batch is empty")]
fn update_batch_is_empty(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let updates = &world.outcome()?.updates;
    eyre::ensure!(updates.is_empty(), "expected no updates, found {updates:?}");
    Ok(())
}

#[then("the move was persisted")]
fn move_was_persisted(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let persistence = &world.outcome()?.persistence;
    if !matches!(persistence, PersistenceStatus::Confirmed) {
        return Err(eyre::eyre!("expected a confirmed batch, got {persistence:?}"));
    }
    Ok(())
}

#[then("the move was not persisted")]
fn move_was_not_persisted(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let persistence = &world.outcome()?.persistence;
    if !matches!(persistence, PersistenceStatus::Skipped) {
        return Err(eyre::eyre!("expected a skipped batch, got {persistence:?}"));
    }
    Ok(())
}
