//! Unit tests for the task board.


use crate::task::domain::{
    MemberId, PersistedTaskData, Position, ProjectId, Task, TaskId, TaskPositionUpdate,
    TaskStatus, WorkspaceId,
};
use chrono::{DateTime, Utc};

pub(super) const WORKSPACE: &str = "ws-1";

pub(super) fn timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default()
}

/// Builds a persisted task in the shared test workspace.
pub(super) fn task(id: &str, status: TaskStatus, position: i64) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id).expect("valid task id"),
        workspace_id: WorkspaceId::new(WORKSPACE).expect("valid workspace id"),
        project_id: ProjectId::new("project-1").expect("valid project id"),
        assignee_id: MemberId::new("member-1").expect("valid member id"),
        name: format!("Task {id}"),
        description: None,
        due_date: timestamp(),
        status,
        position: Position::new(position),
        created_at: timestamp(),
        updated_at: timestamp(),
    })
}

pub(super) fn update(id: &str, status: TaskStatus, position: i64) -> TaskPositionUpdate {
    TaskPositionUpdate {
        id: TaskId::new(id).expect("valid task id"),
        status,
        position: Position::new(position),
    }
}

pub(super) fn ids(column: &[Task]) -> Vec<&str> {
    column.iter().map(|task| task.id().as_str()).collect()
}
