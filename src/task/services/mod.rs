//! Application services for the task board.

mod board;

pub use board::{
    CreateTaskRequest, KanbanBoard, MoveOutcome, PersistenceStatus, TaskBoardError,
    TaskBoardResult, TaskBoardService, UpdateTaskRequest,
};
