//! When steps for task assignment BDD scenarios.

use super::world::{TaskAssignmentWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::{
    api::dto::{CreateTaskBody, UpdateTaskStatusBody},
    task::domain::TaskId,
    user::domain::UserId,
};

#[when(r#"an administrator assigns "{text}" due "{deadline}" to user {owner:i64}"#)]
fn assign_task(
    world: &mut TaskAssignmentWorld,
    text: String,
    deadline: String,
    owner: i64,
) -> Result<(), eyre::Report> {
    let body = CreateTaskBody {
        owner_id: Some(UserId::new(owner)),
        text: Some(text),
        deadline: Some(deadline),
    };
    let created = run_async(world.api.create_task(body))
        .map_err(|err| eyre::eyre!("task assignment failed: {err}"))?;
    world.last_created_task = Some(created);
    Ok(())
}

#[when(r#"the status of task {task_id:i64} is set to "{status}""#)]
fn set_status(world: &mut TaskAssignmentWorld, task_id: i64, status: String) {
    let body = UpdateTaskStatusBody {
        status: Some(status),
    };
    let result = run_async(world.api.update_task_status(TaskId::new(task_id), body));
    world.last_status_update = Some(result);
}
