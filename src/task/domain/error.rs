//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task description is empty after trimming.
    #[error("task text must not be empty")]
    EmptyText,

    /// The status is the empty string.
    #[error("status must not be empty")]
    EmptyStatus,
}
