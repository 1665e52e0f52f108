//! Domain model for task assignment.
//!
//! A task belongs to a user by id only. Nothing checks that the user exists,
//! so the reference may dangle after the user is removed.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{
    DEFAULT_TASK_ICON, Deadline, NewTask, PersistedTaskData, Task, TaskStatus, TaskText,
};
