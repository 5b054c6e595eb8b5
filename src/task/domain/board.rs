//! Kanban board projection of a task collection.

use super::{Task, TaskDocument, TaskDomainError, TaskId, TaskStatus};
use std::collections::BTreeMap;

/// Tasks partitioned into one ordered column per [`TaskStatus`].
///
/// Every status has a column, empty or not. Each column is ordered by
/// ascending position. A board is never patched from outside: a fresh task
/// collection always goes through [`Board::build`] again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: BTreeMap<TaskStatus, Vec<Task>>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            columns: TaskStatus::ALL
                .into_iter()
                .map(|status| (status, Vec::new()))
                .collect(),
        }
    }
}

impl Board {
    /// Creates a board with five empty columns.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Partitions `tasks` by status and sorts each column by position.
    ///
    /// Sorting is stable, so tasks sharing a position keep their input order.
    #[must_use]
    pub fn build(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::empty();
        for task in tasks {
            board.column_mut(task.status()).push(task);
        }
        for column in board.columns.values_mut() {
            column.sort_by_key(Task::position);
        }
        board
    }

    /// Builds a board from raw documents, rejecting the whole collection on
    /// the first invalid record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnknownStatus`] when a document carries a
    /// status outside the five columns, or the validation error of any other
    /// malformed field.
    pub fn from_documents(
        documents: impl IntoIterator<Item = TaskDocument>,
    ) -> Result<Self, TaskDomainError> {
        let tasks = documents
            .into_iter()
            .map(Task::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::build(tasks))
    }

    /// Returns the ordered column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        self.columns
            .get(&status)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of tasks in the column for `status`.
    #[must_use]
    pub fn column_len(&self, status: TaskStatus) -> usize {
        self.column(status).len()
    }

    /// Iterates columns in board order.
    pub fn columns(&self) -> impl Iterator<Item = (TaskStatus, &[Task])> {
        self.columns
            .iter()
            .map(|(status, tasks)| (*status, tasks.as_slice()))
    }

    /// Iterates every task, column by column in board order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.values().flatten()
    }

    /// Total number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    /// Returns `true` when no column holds a task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.values().all(Vec::is_empty)
    }

    /// Locates a task by identifier as `(column, index)`.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<(TaskStatus, usize)> {
        self.columns().find_map(|(status, tasks)| {
            tasks
                .iter()
                .position(|task| task.id() == id)
                .map(|index| (status, index))
        })
    }

    pub(super) fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        self.columns.entry(status).or_default()
    }
}
