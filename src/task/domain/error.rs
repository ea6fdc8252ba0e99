//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while validating caller-supplied task input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// A generic edit tried to change completion, which only a toggle may do.
    #[error("task completion can only be changed by toggling the task")]
    CompletionRequiresToggle,
}

/// Error returned while parsing a task category name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task category: {0}")]
pub struct ParseTaskCategoryError(pub String);

/// Error returned while parsing filter values supplied by the UI.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseFilterError {
    /// The status filter is not one of `all`, `active`, or `completed`.
    #[error("unknown status filter: {0}")]
    Status(String),

    /// The category filter is neither `all` nor a known category.
    #[error("unknown category filter: {0}")]
    Category(String),
}
