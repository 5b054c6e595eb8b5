//! Filters used when listing tasks for a board.

use super::{MemberId, ProjectId, Task, TaskStatus, WorkspaceId};
use chrono::NaiveDate;

/// Workspace-scoped task filter.
///
/// Every filter that is set must match; unset filters match everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQuery {
    workspace_id: WorkspaceId,
    project_id: Option<ProjectId>,
    assignee_id: Option<MemberId>,
    status: Option<TaskStatus>,
    due_on: Option<NaiveDate>,
    search: Option<String>,
}

impl TaskQuery {
    /// Creates a query matching every task of `workspace_id`.
    #[must_use]
    pub const fn new(workspace_id: WorkspaceId) -> Self {
        Self {
            workspace_id,
            project_id: None,
            assignee_id: None,
            status: None,
            due_on: None,
            search: None,
        }
    }

    /// Restricts to one project.
    #[must_use]
    pub fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Restricts to one assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee_id: MemberId) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Restricts to one status column.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to tasks due on the given UTC calendar day.
    #[must_use]
    pub const fn with_due_on(mut self, due_on: NaiveDate) -> Self {
        self.due_on = Some(due_on);
        self
    }

    /// Restricts to tasks whose name contains `search`, ignoring case.
    /// Blank search terms are ignored.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let term = search.into().trim().to_lowercase();
        self.search = (!term.is_empty()).then_some(term);
        self
    }

    /// Returns the workspace the query is scoped to.
    #[must_use]
    pub const fn workspace_id(&self) -> &WorkspaceId {
        &self.workspace_id
    }

    /// Returns `true` when `task` passes every filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        task.workspace_id() == &self.workspace_id
            && self
                .project_id
                .as_ref()
                .is_none_or(|project| task.project_id() == project)
            && self
                .assignee_id
                .as_ref()
                .is_none_or(|assignee| task.assignee_id() == assignee)
            && self.status.is_none_or(|status| task.status() == status)
            && self
                .due_on
                .is_none_or(|day| task.due_date().date_naive() == day)
            && self
                .search
                .as_deref()
                .is_none_or(|term| task.name().to_lowercase().contains(term))
    }
}
