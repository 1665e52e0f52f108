//! Domain tests for task value types.

use crate::task::domain::{
    DEFAULT_TASK_ICON, Deadline, NewTask, TaskDomainError, TaskId, TaskStatus, TaskText,
};
use crate::user::domain::UserId;
use chrono::{TimeZone, Utc};
use rstest::rstest;

#[rstest]
#[case("")]
#[case("   ")]
fn blank_text_is_rejected(#[case] raw: &str) {
    assert_eq!(TaskText::new(raw), Err(TaskDomainError::EmptyText));
}

#[rstest]
fn empty_status_is_rejected() {
    assert_eq!(TaskStatus::new(""), Err(TaskDomainError::EmptyStatus));
}

#[rstest]
#[case("In Progress")]
#[case("done")]
#[case("Blocked on review")]
#[case("  ")]
#[case("\t")]
fn statuses_are_stored_verbatim(#[case] raw: &str) {
    let status = TaskStatus::new(raw).expect("non-empty status");
    assert_eq!(status.as_str(), raw);
    assert!(!status.is_pending());
}

#[rstest]
fn blank_deadline_means_none() {
    assert_eq!(Deadline::new("  "), None);
}

#[rstest]
#[case("2025-01-01T10:00:00Z", Some((2025, 1, 1, 10, 0)))]
#[case("2025-01-01T12:00:00+02:00", Some((2025, 1, 1, 10, 0)))]
#[case("2025-06-30T08:15", Some((2025, 6, 30, 8, 15)))]
#[case("tomorrow-ish", None)]
fn deadline_instants_are_read_as_utc(
    #[case] raw: &str,
    #[case] expected: Option<(i32, u32, u32, u32, u32)>,
) {
    let deadline = Deadline::new(raw).expect("non-blank deadline");
    let expected_instant = expected.map(|(year, month, day, hour, minute)| {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .expect("valid timestamp")
    });

    assert_eq!(deadline.as_str(), raw);
    assert_eq!(deadline.instant(), expected_instant);
}

#[rstest]
fn new_tasks_start_pending_with_default_icon() {
    let new_task = NewTask::new(
        UserId::new(7),
        TaskText::new("Write report").expect("valid text"),
        Deadline::new("2025-01-01T10:00:00Z"),
    );

    let task = new_task.into_task(TaskId::new(3));

    assert_eq!(task.id(), TaskId::new(3));
    assert_eq!(task.user_id(), UserId::new(7));
    assert_eq!(task.icon(), DEFAULT_TASK_ICON);
    assert!(task.status().is_pending());
    assert_eq!(
        task.deadline().map(Deadline::as_str),
        Some("2025-01-01T10:00:00Z")
    );
}

#[rstest]
fn task_serialises_deadline_as_date() {
    let task = NewTask::new(
        UserId::new(1),
        TaskText::new("Write report").expect("valid text"),
        Deadline::new("2025-01-01T10:00:00Z"),
    )
    .into_task(TaskId::new(1));

    let json = serde_json::to_value(&task).expect("task should serialise");

    assert_eq!(
        json,
        serde_json::json!({
            "id": 1,
            "user_id": 1,
            "icon": "📋",
            "text": "Write report",
            "date": "2025-01-01T10:00:00Z",
            "status": "Pending",
        })
    );
}

#[rstest]
fn missing_deadline_serialises_as_null() {
    let task = NewTask::new(
        UserId::new(1),
        TaskText::new("Write report").expect("valid text"),
        None,
    )
    .into_task(TaskId::new(1));

    let json = serde_json::to_value(&task).expect("task should serialise");

    assert_eq!(json["date"], serde_json::Value::Null);
}
