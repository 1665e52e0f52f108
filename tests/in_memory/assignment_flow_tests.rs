//! In-memory integration tests for task assignment flows.

use super::helpers::{Board, assignment, board, signup};
use rstest::rstest;
use taskboard::{
    api::dto::{CreateTaskBody, UpdateTaskStatusBody},
    task::domain::TaskId,
    user::domain::UserId,
};

fn status(value: &str) -> UpdateTaskStatusBody {
    UpdateTaskStatusBody {
        status: Some(value.to_owned()),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concrete_walkthrough_matches_the_wire_contract(board: Board) -> Result<(), eyre::Report> {
    let user = board
        .api
        .create_user(signup("A", "B", "a@b.com", "pw123456"))
        .await?;
    eyre::ensure!(user.id == UserId::new(1), "unexpected user id {}", user.id);

    let task = board
        .api
        .create_task(assignment(1, "Write report", Some("2025-01-01T10:00:00Z")))
        .await?;

    eyre::ensure!(
        serde_json::to_value(&task)?
            == serde_json::json!({
                "id": 1,
                "user_id": 1,
                "icon": "📋",
                "text": "Write report",
                "date": "2025-01-01T10:00:00Z",
                "status": "Pending",
            }),
        "unexpected task shape"
    );
    let owned = board.api.tasks_for_user(UserId::new(1)).await?;
    eyre::ensure!(owned == vec![task], "user 1 should own exactly the new task");

    let sent = board
        .mailer
        .sent()
        .map_err(|err| eyre::eyre!("read outbox: {err}"))?;
    let mail = sent
        .first()
        .ok_or_else(|| eyre::eyre!("expected one notification"))?;
    eyre::ensure!(sent.len() == 1, "expected one notification, got {}", sent.len());
    eyre::ensure!(mail.to == "a@b.com", "wrong recipient {}", mail.to);
    eyre::ensure!(
        mail.from == "\"Project Taskboard\" <board@example.com>",
        "wrong sender {}",
        mail.from
    );
    eyre::ensure!(
        mail.html_body.contains("January 1, 2025 at 10:00 AM"),
        "deadline should be rendered for humans"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn caller_cannot_choose_initial_status_or_icon(board: Board) -> Result<(), eyre::Report> {
    let body: CreateTaskBody = serde_json::from_value(serde_json::json!({
        "ownerId": 1,
        "text": "Ship it",
        "deadline": "2025-05-05T12:00:00Z",
        "status": "Done",
        "icon": "🔥",
    }))?;

    let task = board.api.create_task(body).await?;

    eyre::ensure!(task.status().is_pending(), "status must start Pending");
    eyre::ensure!(task.icon() == "📋", "icon must be the default");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_user_leaves_their_tasks_dangling(board: Board) -> Result<(), eyre::Report> {
    let user = board
        .api
        .create_user(signup("A", "B", "a@b.com", "pw123456"))
        .await?;
    board
        .api
        .create_task(assignment(1, "Write report", None))
        .await?;

    board.api.delete_user(user.id).await?;

    let owned = board.api.tasks_for_user(user.id).await?;
    eyre::ensure!(owned.len() == 1, "tasks should survive their owner");
    board
        .api
        .create_task(assignment(1, "Follow up", None))
        .await?;
    let sent = board
        .mailer
        .sent()
        .map_err(|err| eyre::eyre!("read outbox: {err}"))?;
    eyre::ensure!(
        sent.len() == 1,
        "no mail should go to a deleted user, got {}",
        sent.len()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_are_listed_newest_first_and_per_owner_in_creation_order(
    board: Board,
) -> Result<(), eyre::Report> {
    for (owner, text) in [(1, "a"), (2, "b"), (1, "c"), (2, "d")] {
        board.api.create_task(assignment(owner, text, None)).await?;
    }

    let all: Vec<i64> = board
        .api
        .list_tasks()
        .await?
        .iter()
        .map(|task| task.id().value())
        .collect();
    let first_owner: Vec<i64> = board
        .api
        .tasks_for_user(UserId::new(1))
        .await?
        .iter()
        .map(|task| task.id().value())
        .collect();

    eyre::ensure!(all == [4, 3, 2, 1], "unexpected global order {all:?}");
    eyre::ensure!(first_owner == [1, 3], "unexpected owner order {first_owner:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn statuses_are_open_ended_and_last_write_wins(board: Board) -> Result<(), eyre::Report> {
    let task = board.api.create_task(assignment(1, "job", None)).await?;

    for value in ["In Progress", "blocked: waiting on legal", "Done"] {
        board.api.update_task_status(task.id(), status(value)).await?;
    }

    let stored = board.api.list_tasks().await?;
    let current = stored
        .first()
        .map(|found| found.status().as_str().to_owned());
    eyre::ensure!(
        current.as_deref() == Some("Done"),
        "unexpected status {current:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_task_status_update_changes_nothing(board: Board) -> Result<(), eyre::Report> {
    let task = board.api.create_task(assignment(1, "job", None)).await?;

    let result = board
        .api
        .update_task_status(TaskId::new(task.id().value() + 1), status("Done"))
        .await;

    let code = result.err().map(|err| err.status());
    eyre::ensure!(code == Some(404), "expected 404, got {code:?}");
    let stored = board.api.list_tasks().await?;
    eyre::ensure!(stored == vec![task], "store should be unchanged");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn whitespace_status_is_kept_but_empty_status_is_refused(
    board: Board,
) -> Result<(), eyre::Report> {
    let task = board.api.create_task(assignment(1, "job", None)).await?;

    board.api.update_task_status(task.id(), status("  ")).await?;
    let refused = board.api.update_task_status(task.id(), status("")).await;

    let code = refused.err().map(|err| err.status());
    eyre::ensure!(code == Some(400), "expected 400, got {code:?}");
    let stored = board.api.list_tasks().await?;
    let current = stored
        .first()
        .map(|found| found.status().as_str().to_owned());
    eyre::ensure!(
        current.as_deref() == Some("  "),
        "whitespace status should be stored verbatim, got {current:?}"
    );
    Ok(())
}
