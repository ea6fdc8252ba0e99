//! Application services for the task board.

mod board;

pub use board::{
    AddTaskRequest, BoardSnapshot, BoardUpdate, TaskBoardError, TaskBoardResult,
    TaskBoardService,
};
