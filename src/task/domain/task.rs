//! Task record and its construction paths.

use super::{MemberId, Position, ProjectId, TaskDomainError, TaskId, TaskStatus, WorkspaceId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A task as shown on the board.
///
/// The board only reads and rewrites `status` and `position`; everything
/// else is payload carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    workspace_id: WorkspaceId,
    project_id: ProjectId,
    assignee_id: MemberId,
    name: String,
    description: Option<String>,
    due_date: DateTime<Utc>,
    status: TaskStatus,
    position: Position,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Owning workspace.
    pub workspace_id: WorkspaceId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Assigned member.
    pub assignee_id: MemberId,
    /// Display name; must not be blank.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Initial column.
    pub status: TaskStatus,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted workspace.
    pub workspace_id: WorkspaceId,
    /// Persisted project.
    pub project_id: ProjectId,
    /// Persisted assignee.
    pub assignee_id: MemberId,
    /// Persisted name.
    pub name: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted due date.
    pub due_date: DateTime<Utc>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted column position.
    pub position: Position,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task at the given column position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the name is blank.
    pub fn new(
        details: NewTask,
        position: Position,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let name = validated_name(&details.name)?;
        let timestamp = clock.utc();

        Ok(Self {
            id: TaskId::generate(),
            workspace_id: details.workspace_id,
            project_id: details.project_id,
            assignee_id: details.assignee_id,
            name,
            description: details.description,
            due_date: details.due_date,
            status: details.status,
            position,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            workspace_id: data.workspace_id,
            project_id: data.project_id,
            assignee_id: data.assignee_id,
            name: data.name,
            description: data.description,
            due_date: data.due_date,
            status: data.status,
            position: data.position,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the owning workspace.
    #[must_use]
    pub const fn workspace_id(&self) -> &WorkspaceId {
        &self.workspace_id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Returns the assigned member.
    #[must_use]
    pub const fn assignee_id(&self) -> &MemberId {
        &self.assignee_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the status column the task sits in.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the position within the status column.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Places the task in `status` at `position`.
    pub fn move_to(&mut self, status: TaskStatus, position: Position) {
        self.status = status;
        self.position = position;
    }

    /// Records a persisted change at `timestamp`.
    pub fn touch(&mut self, timestamp: DateTime<Utc>) {
        self.updated_at = timestamp;
    }

    /// Renames the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when `name` is blank; the
    /// task keeps its old name in that case.
    pub fn rename(&mut self, name: &str) -> Result<(), TaskDomainError> {
        self.name = validated_name(name)?;
        Ok(())
    }

    /// Replaces or clears the description.
    pub fn describe(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Moves the due date.
    pub fn reschedule(&mut self, due_date: DateTime<Utc>) {
        self.due_date = due_date;
    }

    /// Hands the task to another member.
    pub fn assign(&mut self, assignee_id: MemberId) {
        self.assignee_id = assignee_id;
    }

    /// Files the task under another project of the same workspace.
    pub fn transfer(&mut self, project_id: ProjectId) {
        self.project_id = project_id;
    }
}

fn validated_name(raw: &str) -> Result<String, TaskDomainError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(TaskDomainError::EmptyTaskName);
    }
    Ok(name.to_owned())
}
