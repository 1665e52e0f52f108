//! Application services for task orchestration.

mod assignment;

pub use assignment::{
    CreateTaskRequest, TaskAssignmentError, TaskAssignmentResult, TaskAssignmentService,
    UpdateTaskStatusRequest,
};
