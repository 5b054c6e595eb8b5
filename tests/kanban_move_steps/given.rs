//! Given steps for kanban move BDD scenarios.

use super::world::{KanbanWorld, WORKSPACE, parse_status, run_async, scenario_time};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::{
    domain::{MemberId, PersistedTaskData, Position, ProjectId, Task, TaskId, WorkspaceId},
    ports::TaskRepository,
};

#[given(r#"a task "{id}" in column "{status}" at position {position:u64}"#)]
fn stored_task(
    world: &mut KanbanWorld,
    id: String,
    status: String,
    position: u64,
) -> Result<(), eyre::Report> {
    let task = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id.as_str())?,
        workspace_id: WorkspaceId::new(WORKSPACE)?,
        project_id: ProjectId::new("project-bdd")?,
        assignee_id: MemberId::new("member-bdd")?,
        name: format!("Scenario task {id}"),
        description: None,
        due_date: scenario_time(),
        status: parse_status(&status)?,
        position: Position::new(i64::try_from(position)?),
        created_at: scenario_time(),
        updated_at: scenario_time(),
    });

    run_async(world.repository.store(&task)).wrap_err("store scenario task")?;
    Ok(())
}
