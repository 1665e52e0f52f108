//! Service layer for task creation, listing, and status changes.

use crate::notification::{ports::Mailer, services::AssignmentNotifier};
use crate::task::{
    domain::{Deadline, NewTask, Task, TaskDomainError, TaskId, TaskStatus, TaskText},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::user::{domain::UserId, ports::UserRepository};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for assigning a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    owner_id: UserId,
    text: String,
    deadline: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a task request for `owner_id`.
    #[must_use]
    pub fn new(owner_id: UserId, text: impl Into<String>, deadline: Option<String>) -> Self {
        Self {
            owner_id,
            text: text.into(),
            deadline,
        }
    }
}

/// Request payload for changing a task's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskStatusRequest {
    id: TaskId,
    status: String,
}

impl UpdateTaskStatusRequest {
    /// Creates a status change request.
    #[must_use]
    pub fn new(id: TaskId, status: impl Into<String>) -> Self {
        Self {
            id,
            status: status.into(),
        }
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskAssignmentError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskAssignmentResult<T> = Result<T, TaskAssignmentError>;

/// Task orchestration service.
///
/// Creating a task persists it first and only then notifies its owner. A
/// notification problem never undoes or fails the creation.
#[derive(Clone)]
pub struct TaskAssignmentService<T, U, M>
where
    T: TaskRepository,
    U: UserRepository,
    M: Mailer,
{
    tasks: Arc<T>,
    users: Arc<U>,
    notifier: AssignmentNotifier<M>,
}

impl<T, U, M> TaskAssignmentService<T, U, M>
where
    T: TaskRepository,
    U: UserRepository,
    M: Mailer,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, users: Arc<U>, notifier: AssignmentNotifier<M>) -> Self {
        Self {
            tasks,
            users,
            notifier,
        }
    }

    /// Returns every task, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAssignmentError::Repository`] when the store fails.
    pub async fn list_all(&self) -> TaskAssignmentResult<Vec<Task>> {
        Ok(self.tasks.find_all().await?)
    }

    /// Returns the tasks owned by `user_id`.
    ///
    /// An unknown user simply has no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAssignmentError::Repository`] when the store fails.
    pub async fn tasks_for_user(&self, user_id: UserId) -> TaskAssignmentResult<Vec<Task>> {
        Ok(self.tasks.find_by_user_id(user_id).await?)
    }

    /// Creates a `Pending` task and notifies its owner.
    ///
    /// The owner is not required to exist. When it does not, or its lookup
    /// fails, the task is still returned and no email is sent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAssignmentError::Domain`] for blank text, or
    /// [`TaskAssignmentError::Repository`] when the task cannot be stored.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskAssignmentResult<Task> {
        let text = TaskText::new(request.text)?;
        let deadline = request.deadline.and_then(Deadline::new);
        let new_task = NewTask::new(request.owner_id, text, deadline);

        let task = self.tasks.create(&new_task).await?;
        tracing::info!(task_id = %task.id(), user_id = %task.user_id(), "created task");

        self.notify_owner(&task).await;
        Ok(task)
    }

    async fn notify_owner(&self, task: &Task) {
        match self.users.find_by_id(task.user_id()).await {
            Ok(Some(owner)) => {
                self.notifier
                    .notify_assignment(owner.email().as_str(), task)
                    .await;
            }
            Ok(None) => {
                tracing::warn!(
                    task_id = %task.id(),
                    user_id = %task.user_id(),
                    "task owner not found, skipping notification"
                );
            }
            Err(err) => {
                tracing::error!(
                    task_id = %task.id(),
                    user_id = %task.user_id(),
                    error = %err,
                    "failed to look up task owner, skipping notification"
                );
            }
        }
    }

    /// Overwrites a task's status with the supplied value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAssignmentError::Domain`] for an empty status, or
    /// [`TaskAssignmentError::Repository`] when the task does not exist or
    /// the store fails.
    pub async fn update_status(&self, request: UpdateTaskStatusRequest) -> TaskAssignmentResult<()> {
        let status = TaskStatus::new(request.status)?;
        self.tasks.update_status(request.id, &status).await?;
        tracing::info!(task_id = %request.id, status = %status, "updated task status");
        Ok(())
    }
}
