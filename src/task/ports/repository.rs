//! Repository port for task listing, editing and bulk position updates.

use crate::task::domain::{Task, TaskId, TaskPositionUpdate, TaskQuery};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Replaces a stored task with `task`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task matching `query`, in no particular order.
    async fn list(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>>;

    /// Writes status and position for every entry of `updates`, stamping the
    /// touched tasks with `updated_at`, and returns the updated tasks.
    ///
    /// The batch is all-or-nothing and replaying it yields the same stored
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when any entry names an
    /// unknown task; nothing is written in that case.
    async fn bulk_update(
        &self,
        updates: &[TaskPositionUpdate],
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
