//! Then steps for task assignment BDD scenarios.

use super::world::{TaskAssignmentWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::{
    task::domain::{Deadline, Task, TaskId},
    user::domain::UserId,
};

fn created_task(world: &TaskAssignmentWorld) -> Result<&Task, eyre::Report> {
    world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))
}

#[then(r#"the created task has id {task_id:i64} and status "{status}""#)]
fn created_task_has_id_and_status(
    world: &TaskAssignmentWorld,
    task_id: i64,
    status: String,
) -> Result<(), eyre::Report> {
    let task = created_task(world)?;
    eyre::ensure!(
        task.id() == TaskId::new(task_id),
        "expected task id {task_id}, found {}",
        task.id()
    );
    eyre::ensure!(
        task.status().as_str() == status,
        "expected status {status}, found {}",
        task.status()
    );
    Ok(())
}

#[then(r#"the created task has icon "{icon}" and date "{date}""#)]
fn created_task_has_icon_and_date(
    world: &TaskAssignmentWorld,
    icon: String,
    date: String,
) -> Result<(), eyre::Report> {
    let task = created_task(world)?;
    eyre::ensure!(task.icon() == icon, "expected icon {icon}, found {}", task.icon());
    eyre::ensure!(
        task.deadline().map(Deadline::as_str) == Some(date.as_str()),
        "expected date {date}, found {:?}",
        task.deadline()
    );
    Ok(())
}

#[then("user {owner:i64} has exactly {count:usize} task")]
fn user_has_tasks(
    world: &TaskAssignmentWorld,
    owner: i64,
    count: usize,
) -> Result<(), eyre::Report> {
    let tasks = run_async(world.api.tasks_for_user(UserId::new(owner)))
        .map_err(|err| eyre::eyre!("list tasks for user: {err}"))?;
    eyre::ensure!(
        tasks.len() == count,
        "expected {count} task(s), found {}",
        tasks.len()
    );
    let created = created_task(world)?;
    eyre::ensure!(
        tasks.contains(created),
        "created task missing from the owner's tasks"
    );
    Ok(())
}

#[then(r#"{count:usize} notification was sent to "{recipient}""#)]
fn notifications_sent_to(
    world: &TaskAssignmentWorld,
    count: usize,
    recipient: String,
) -> Result<(), eyre::Report> {
    let sent = world
        .mailer
        .sent()
        .map_err(|err| eyre::eyre!("read outbox: {err}"))?;
    eyre::ensure!(
        sent.len() == count,
        "expected {count} notification(s), found {}",
        sent.len()
    );
    eyre::ensure!(
        sent.iter().all(|mail| mail.to == recipient),
        "notification sent to an unexpected recipient"
    );
    Ok(())
}

#[then("no notification was sent")]
fn no_notification_sent(world: &TaskAssignmentWorld) -> Result<(), eyre::Report> {
    let sent = world
        .mailer
        .sent()
        .map_err(|err| eyre::eyre!("read outbox: {err}"))?;
    eyre::ensure!(sent.is_empty(), "expected no notifications, found {}", sent.len());
    Ok(())
}

#[then("the status update succeeds")]
fn status_update_succeeds(world: &TaskAssignmentWorld) -> Result<(), eyre::Report> {
    match world.last_status_update.as_ref() {
        Some(Ok(_)) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("status update failed: {err}")),
        None => Err(eyre::eyre!("missing status update result")),
    }
}

#[then("the status update fails with status code {code:u16}")]
fn status_update_fails_with(world: &TaskAssignmentWorld, code: u16) -> Result<(), eyre::Report> {
    let result = world
        .last_status_update
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status update result"))?;
    match result {
        Err(err) if err.status() == code => Ok(()),
        other => Err(eyre::eyre!("expected failure with {code}, got {other:?}")),
    }
}

#[then(r#"task {task_id:i64} of user {owner:i64} has status "{status}""#)]
fn task_has_status(
    world: &TaskAssignmentWorld,
    task_id: i64,
    owner: i64,
    status: String,
) -> Result<(), eyre::Report> {
    let tasks = run_async(world.api.tasks_for_user(UserId::new(owner)))
        .map_err(|err| eyre::eyre!("list tasks for user: {err}"))?;
    let task = tasks
        .iter()
        .find(|task| task.id() == TaskId::new(task_id))
        .ok_or_else(|| eyre::eyre!("task {task_id} not found for user {owner}"))?;
    eyre::ensure!(
        task.status().as_str() == status,
        "expected status {status}, found {}",
        task.status()
    );
    Ok(())
}
