//! Raw task records as returned by the hosted document store.

use super::{
    MemberId, PersistedTaskData, Position, ProjectId, Task, TaskDomainError, TaskId, TaskStatus,
    WorkspaceId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task document with an unvalidated status string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDocument {
    /// Document identifier.
    #[serde(rename = "$id")]
    pub id: String,
    /// Owning workspace.
    pub workspace_id: String,
    /// Owning project.
    pub project_id: String,
    /// Assigned member.
    pub assignee_id: String,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Status as stored; validated on conversion.
    pub status: String,
    /// Column position.
    pub position: i64,
    /// Creation timestamp.
    #[serde(rename = "$createdAt")]
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    #[serde(rename = "$updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<TaskDocument> for Task {
    type Error = TaskDomainError;

    fn try_from(document: TaskDocument) -> Result<Self, Self::Error> {
        let status = TaskStatus::try_from(document.status.as_str()).map_err(|_| {
            TaskDomainError::UnknownStatus {
                task_id: document.id.clone(),
                status: document.status.clone(),
            }
        })?;
        if document.name.trim().is_empty() {
            return Err(TaskDomainError::EmptyTaskName);
        }

        Ok(Self::from_persisted(PersistedTaskData {
            id: TaskId::new(document.id)?,
            workspace_id: WorkspaceId::new(document.workspace_id)?,
            project_id: ProjectId::new(document.project_id)?,
            assignee_id: MemberId::new(document.assignee_id)?,
            name: document.name,
            description: document.description,
            due_date: document.due_date,
            status,
            position: Position::new(document.position),
            created_at: document.created_at,
            updated_at: document.updated_at,
        }))
    }
}
