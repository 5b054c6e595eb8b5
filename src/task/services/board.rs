//! Service layer for loading boards, editing tasks and committing moves.

use crate::task::{
    domain::{
        Board, MemberId, MoveInstruction, NewTask, Position, PositionPolicy, ProjectId, Task,
        TaskDomainError, TaskId, TaskPositionUpdate, TaskQuery, TaskStatus, WorkspaceId,
        reconcile,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Request payload for creating a task on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    workspace_id: String,
    project_id: String,
    assignee_id: String,
    name: String,
    due_date: DateTime<Utc>,
    status: TaskStatus,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with required fields. The task starts in the
    /// backlog unless [`Self::with_status`] says otherwise.
    #[must_use]
    pub fn new(
        workspace_id: impl Into<String>,
        project_id: impl Into<String>,
        assignee_id: impl Into<String>,
        name: impl Into<String>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            project_id: project_id.into(),
            assignee_id: assignee_id.into(),
            name: name.into(),
            due_date,
            status: TaskStatus::Backlog,
            description: None,
        }
    }

    /// Sets the initial status column.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Field edits for an existing task. Fields left unset keep their stored
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    name: Option<String>,
    description: Option<Option<String>>,
    due_date: Option<DateTime<Utc>>,
    assignee_id: Option<String>,
    project_id: Option<String>,
    status: Option<TaskStatus>,
    position: Option<Position>,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renames the task.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn without_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Moves the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Reassigns the task.
    #[must_use]
    pub fn with_assignee(mut self, assignee_id: impl Into<String>) -> Self {
        self.assignee_id = Some(assignee_id.into());
        self
    }

    /// Files the task under another project.
    #[must_use]
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Moves the task to another column. Without [`Self::with_position`]
    /// the task is appended to the bottom of that column.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Stores an explicit column position.
    #[must_use]
    pub const fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// A board together with the query it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanbanBoard {
    query: TaskQuery,
    board: Board,
}

impl KanbanBoard {
    /// Builds a board for `query` from `tasks`.
    #[must_use]
    pub fn new(query: TaskQuery, tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            query,
            board: Board::build(tasks),
        }
    }

    /// Replaces the board with one built from a fresh task collection,
    /// discarding any local ordering.
    pub fn rebuild(&mut self, tasks: impl IntoIterator<Item = Task>) {
        self.board = Board::build(tasks);
    }

    /// Returns the query the board is scoped to.
    #[must_use]
    pub const fn query(&self) -> &TaskQuery {
        &self.query
    }

    /// Returns the current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }
}

/// What happened to the update batch of a move.
#[derive(Debug, Clone)]
pub enum PersistenceStatus {
    /// The move produced no updates; nothing was sent.
    Skipped,
    /// The batch was stored and the board rebuilt from the repository.
    Confirmed,
    /// The batch was rejected. The optimistic board is kept as is.
    Failed(TaskRepositoryError),
}

/// Outcome of committing one move.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    /// Board to display next.
    pub board: KanbanBoard,
    /// Batch produced by the move.
    pub updates: Vec<TaskPositionUpdate>,
    /// Fate of the batch.
    pub persistence: PersistenceStatus,
}

/// Board orchestration service.
#[derive(Clone)]
pub struct TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    policy: PositionPolicy,
}

impl<R, C> TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service using the default [`PositionPolicy`].
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            policy: PositionPolicy::default(),
        }
    }

    /// Replaces the position policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: PositionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the position policy in use.
    #[must_use]
    pub const fn policy(&self) -> &PositionPolicy {
        &self.policy
    }

    /// Lists tasks for `query` and builds a board from them.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when listing fails.
    pub async fn load_board(&self, query: TaskQuery) -> TaskBoardResult<KanbanBoard> {
        let tasks = self.repository.list(&query).await?;
        Ok(KanbanBoard::new(query, tasks))
    }

    /// Replaces `board` with a rebuild from the repository.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when listing fails; the board
    /// is left untouched in that case.
    pub async fn refresh(&self, board: &mut KanbanBoard) -> TaskBoardResult<()> {
        let tasks = self.repository.list(board.query()).await?;
        debug!(tasks = tasks.len(), "rebuilding board from repository");
        board.rebuild(tasks);
        Ok(())
    }

    /// Creates a task at the bottom of its status column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when identifiers or the name are
    /// invalid, or [`TaskBoardError::Repository`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskBoardResult<Task> {
        let details = NewTask {
            workspace_id: WorkspaceId::new(request.workspace_id)?,
            project_id: ProjectId::new(request.project_id)?,
            assignee_id: MemberId::new(request.assignee_id)?,
            name: request.name,
            description: request.description,
            due_date: request.due_date,
            status: request.status,
        };

        let position = self
            .append_position(&details.workspace_id, details.status)
            .await?;

        let task = Task::new(details, position, &*self.clock)?;
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Applies `request` to the stored task `id`, persists it and rebuilds
    /// `board`.
    ///
    /// A status change without an explicit position appends the task to
    /// its new column. Nothing is written when any field fails validation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] for a blank name or identifier, or
    /// [`TaskBoardError::Repository`] when the task is unknown or
    /// persistence fails.
    pub async fn update_task(
        &self,
        board: &mut KanbanBoard,
        id: &TaskId,
        request: UpdateTaskRequest,
    ) -> TaskBoardResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))?;

        if let Some(name) = request.name.as_deref() {
            task.rename(name)?;
        }
        if let Some(description) = request.description {
            task.describe(description);
        }
        if let Some(due_date) = request.due_date {
            task.reschedule(due_date);
        }
        if let Some(assignee_id) = request.assignee_id {
            task.assign(MemberId::new(assignee_id)?);
        }
        if let Some(project_id) = request.project_id {
            task.transfer(ProjectId::new(project_id)?);
        }

        let status = request.status.unwrap_or_else(|| task.status());
        let position = match request.position {
            Some(position) => position,
            None if status != task.status() => {
                self.append_position(task.workspace_id(), status).await?
            }
            None => task.position(),
        };
        task.move_to(status, position);
        task.touch(self.clock.utc());

        self.repository.update(&task).await?;
        debug!(task_id = %task.id(), status = %status, "updated task");
        self.rebuild_after_write(board).await;
        Ok(task)
    }

    /// Deletes the stored task `id` and rebuilds `board`.
    ///
    /// Remaining positions are not renumbered; the gap left behind keeps
    /// the column order intact.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the task is unknown or
    /// persistence fails.
    pub async fn delete_task(&self, board: &mut KanbanBoard, id: &TaskId) -> TaskBoardResult<()> {
        self.repository.delete(id).await?;
        debug!(task_id = %id, "deleted task");
        self.rebuild_after_write(board).await;
        Ok(())
    }

    /// Applies `instruction` to `board` and persists the resulting batch.
    ///
    /// On success the board is rebuilt from the repository. When the batch
    /// is rejected the optimistic board is returned unchanged; no rollback
    /// is attempted and the next successful rebuild brings it back in line.
    pub async fn move_task(&self, board: KanbanBoard, instruction: MoveInstruction) -> MoveOutcome {
        let KanbanBoard {
            query,
            board: current,
        } = board;
        let reconciliation = reconcile(current, instruction, &self.policy);
        let mut next = KanbanBoard {
            query,
            board: reconciliation.board,
        };
        let updates = reconciliation.updates;

        if updates.is_empty() {
            return MoveOutcome {
                board: next,
                updates,
                persistence: PersistenceStatus::Skipped,
            };
        }

        let persistence = match self.repository.bulk_update(&updates, self.clock.utc()).await {
            Ok(_) => {
                self.rebuild_after_write(&mut next).await;
                PersistenceStatus::Confirmed
            }
            Err(err) => {
                warn!(error = %err, updates = updates.len(), "bulk position update failed");
                PersistenceStatus::Failed(err)
            }
        };

        MoveOutcome {
            board: next,
            updates,
            persistence,
        }
    }

    /// Position for a task appended to `status` in `workspace_id`.
    async fn append_position(
        &self,
        workspace_id: &WorkspaceId,
        status: TaskStatus,
    ) -> TaskBoardResult<Position> {
        let column_query = TaskQuery::new(workspace_id.clone()).with_status(status);
        let tail = self
            .repository
            .list(&column_query)
            .await?
            .iter()
            .map(Task::position)
            .max();
        Ok(self.policy.next_after(tail))
    }

    /// Rebuilds `board` after a confirmed write, keeping the current board
    /// when the re-list fails.
    async fn rebuild_after_write(&self, board: &mut KanbanBoard) {
        if let Err(err) = self.refresh(board).await {
            warn!(error = %err, "keeping current board after failed refresh");
        }
    }
}
