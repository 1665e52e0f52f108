//! Repository port for task persistence and lookup.

use crate::task::domain::{NewTask, Task, TaskId, TaskStatus};
use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every task across all users, most recently created first.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks owned by `user_id` in a stable order.
    async fn find_by_user_id(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// The owner reference is not checked against the user store.
    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Overwrites the status of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update_status(&self, id: TaskId, status: &TaskStatus) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
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
