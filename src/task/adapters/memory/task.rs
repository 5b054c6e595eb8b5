//! In-memory task repository for tests and embedded use.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::task::{
    domain::{Task, TaskId, TaskPositionUpdate, TaskQuery},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `tasks`.
    ///
    /// Later tasks replace earlier ones with the same identifier.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let map = tasks
            .into_iter()
            .map(|task| (task.id().clone(), task))
            .collect();
        Self {
            state: Arc::new(RwLock::new(map)),
        }
    }
}

fn poisoned<T>(err: &PoisonError<T>) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(|err| poisoned(&err))?;
        if tasks.contains_key(task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id().clone()));
        }
        tasks.insert(task.id().clone(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(|err| poisoned(&err))?;
        let Some(stored) = tasks.get_mut(task.id()) else {
            return Err(TaskRepositoryError::NotFound(task.id().clone()));
        };
        *stored = task.clone();
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(|err| poisoned(&err))?;
        tasks
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(tasks.get(id).cloned())
    }

    async fn list(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(tasks
            .values()
            .filter(|task| query.matches(task))
            .cloned()
            .collect())
    }

    async fn bulk_update(
        &self,
        updates: &[TaskPositionUpdate],
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let mut tasks = self.state.write().map_err(|err| poisoned(&err))?;
        if let Some(missing) = updates.iter().find(|update| !tasks.contains_key(&update.id)) {
            return Err(TaskRepositoryError::NotFound(missing.id.clone()));
        }

        let mut written = Vec::with_capacity(updates.len());
        for update in updates {
            let Some(task) = tasks.get_mut(&update.id) else {
                return Err(TaskRepositoryError::NotFound(update.id.clone()));
            };
            task.move_to(update.status, update.position);
            task.touch(updated_at);
            written.push(task.clone());
        }
        Ok(written)
    }
}
