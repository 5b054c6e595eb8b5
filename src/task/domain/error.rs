//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// An identifier was empty after trimming.
    #[error("{0} identifier must not be empty")]
    EmptyIdentifier(&'static str),

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// A task record carried a status outside the board's five columns.
    #[error("task {task_id} has unknown status '{status}'")]
    UnknownStatus {
        /// Raw identifier of the offending record.
        task_id: String,
        /// Status value as received.
        status: String,
    },
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
