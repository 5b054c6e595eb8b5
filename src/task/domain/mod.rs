//! Domain model for the task board.
//!
//! Tasks are projected into a five-column [`Board`] and rearranged with
//! [`reconcile`]. Nothing in here performs I/O; persistence sits behind the
//! ports in [`crate::task::ports`].

mod board;
mod document;
mod error;
mod ids;
mod position;
mod query;
mod reconcile;
mod status;
mod task;

pub use board::Board;
pub use document::TaskDocument;
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{MemberId, ProjectId, TaskId, WorkspaceId};
pub use position::{Position, PositionPolicy};
pub use query::TaskQuery;
pub use reconcile::{
    BulkUpdateRequest, ColumnSlot, MoveInstruction, Reconciliation, TaskPositionUpdate, reconcile,
};
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task};
