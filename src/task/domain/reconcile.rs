//! Applying a drag-and-drop move to a board.
//!
//! [`reconcile`] removes the dragged task from its source slot, inserts it at
//! the destination slot, renumbers the touched columns with the
//! [`PositionPolicy`] and reports only the rows whose stored status or
//! position has to change.

use super::{Board, Position, PositionPolicy, Task, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One end of a move: a column and a zero-based index inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnSlot {
    /// Column the slot belongs to.
    pub status: TaskStatus,
    /// Index within the column.
    pub index: usize,
}

impl ColumnSlot {
    /// Creates a slot.
    #[must_use]
    pub const fn new(status: TaskStatus, index: usize) -> Self {
        Self { status, index }
    }
}

/// Source and destination of a single drag-and-drop gesture.
///
/// For moves within one column the destination index refers to the column
/// after the dragged task has been removed, which is how drag-and-drop
/// libraries report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveInstruction {
    /// Where the task was picked up.
    pub source: ColumnSlot,
    /// Where the task was dropped.
    pub destination: ColumnSlot,
}

impl MoveInstruction {
    /// Creates a move instruction.
    #[must_use]
    pub const fn new(source: ColumnSlot, destination: ColumnSlot) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Returns `true` when the task stays in its column.
    #[must_use]
    pub fn is_within_column(&self) -> bool {
        self.source.status == self.destination.status
    }
}

/// One row of the bulk-update batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskPositionUpdate {
    /// Task to update.
    #[serde(rename = "$id")]
    pub id: TaskId,
    /// Status to store.
    pub status: TaskStatus,
    /// Position to store.
    pub position: Position,
}

impl TaskPositionUpdate {
    /// Captures the current placement of `task`.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().clone(),
            status: task.status(),
            position: task.position(),
        }
    }
}

/// Body of a bulk position update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkUpdateRequest {
    /// Rows to persist.
    pub tasks: Vec<TaskPositionUpdate>,
}

impl From<Vec<TaskPositionUpdate>> for BulkUpdateRequest {
    fn from(tasks: Vec<TaskPositionUpdate>) -> Self {
        Self { tasks }
    }
}

/// Result of applying a move: the optimistic board and the rows to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Board after the move, with touched columns renumbered.
    pub board: Board,
    /// Minimal update batch. Empty when the move was ignored.
    pub updates: Vec<TaskPositionUpdate>,
}

impl Reconciliation {
    const fn unchanged(board: Board) -> Self {
        Self {
            board,
            updates: Vec::new(),
        }
    }
}

/// Applies `instruction` to `board`.
///
/// The batch lists the moved task first, then the destination column rows
/// whose position changed, then (for cross-column moves) the source column
/// rows whose position changed, each in column order. Columns the move does
/// not touch never appear.
///
/// A source index that no longer exists (stale drag state) leaves the board
/// unchanged and yields an empty batch. A destination index past the end of
/// the column appends, but the moved task keeps the position derived from
/// the requested index, so it still sorts last.
#[must_use]
pub fn reconcile(
    mut board: Board,
    instruction: MoveInstruction,
    policy: &PositionPolicy,
) -> Reconciliation {
    let MoveInstruction {
        source,
        destination,
    } = instruction;

    let source_column = board.column_mut(source.status);
    if source.index >= source_column.len() {
        warn!(
            source_status = %source.status,
            source_index = source.index,
            column_len = source_column.len(),
            "ignoring move from a vacant source slot"
        );
        return Reconciliation::unchanged(board);
    }
    let mut moved = source_column.remove(source.index);

    let destination_column = board.column_mut(destination.status);
    let insert_at = destination.index.min(destination_column.len());
    moved.move_to(destination.status, policy.position_for(destination.index));

    let mut updates = vec![TaskPositionUpdate::from_task(&moved)];
    destination_column.insert(insert_at, moved);
    renumber(
        destination_column,
        destination.status,
        Some(insert_at),
        policy,
        &mut updates,
    );

    if !instruction.is_within_column() {
        renumber(
            board.column_mut(source.status),
            source.status,
            None,
            policy,
            &mut updates,
        );
    }

    debug!(
        source_status = %source.status,
        destination_status = %destination.status,
        updates = updates.len(),
        "reconciled board move"
    );
    Reconciliation { board, updates }
}

/// Reassigns policy positions to `column`, recording rows that changed.
fn renumber(
    column: &mut [Task],
    status: TaskStatus,
    skip: Option<usize>,
    policy: &PositionPolicy,
    updates: &mut Vec<TaskPositionUpdate>,
) {
    for (index, task) in column.iter_mut().enumerate() {
        if skip == Some(index) {
            continue;
        }
        let position = policy.position_for(index);
        if task.position() != position {
            task.move_to(status, position);
            updates.push(TaskPositionUpdate::from_task(task));
        }
    }
}
