//! Task record and its value types.

use super::{TaskDomainError, TaskId};
use crate::user::domain::UserId;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon given to every newly created task.
pub const DEFAULT_TASK_ICON: &str = "📋";

/// Task status.
///
/// Creation always yields [`TaskStatus::pending`]; afterwards any non-empty
/// string the caller chooses is stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskStatus(String);

impl TaskStatus {
    /// Storage value of the initial status.
    pub const PENDING: &'static str = "Pending";

    /// Returns the initial status of every task.
    #[must_use]
    pub fn pending() -> Self {
        Self(Self::PENDING.to_owned())
    }

    /// Creates a caller-supplied status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyStatus`] when the value is empty.
    /// Whitespace is a legitimate status and is kept as given.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(TaskDomainError::EmptyStatus);
        }
        Ok(Self(raw))
    }

    /// Returns the status as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether this is the initial status.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.0 == Self::PENDING
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-text task description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskText(String);

impl TaskText {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyText`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyText);
        }
        Ok(Self(raw))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Scheduling datum of a task, kept exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(String);

impl Deadline {
    /// Naive layouts produced by browser date-time inputs, read as UTC.
    const NAIVE_FORMATS: [&'static str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

    /// Wraps a caller-supplied deadline. Blank values mean "no deadline".
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self(raw))
    }

    /// Returns the deadline as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interprets the deadline as an instant, when it is machine-readable.
    ///
    /// RFC 3339 values keep their offset; naive date-times are taken as UTC.
    #[must_use]
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        let raw = self.0.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        Self::NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|naive| naive.and_utc())
    }
}

/// Validated task ready to be persisted.
///
/// Status and icon are not accepted from callers: they are always
/// [`TaskStatus::pending`] and [`DEFAULT_TASK_ICON`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    owner_id: UserId,
    text: TaskText,
    deadline: Option<Deadline>,
}

impl NewTask {
    /// Creates a new task for `owner_id`.
    #[must_use]
    pub const fn new(owner_id: UserId, text: TaskText, deadline: Option<Deadline>) -> Self {
        Self {
            owner_id,
            text,
            deadline,
        }
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the description.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<&Deadline> {
        self.deadline.as_ref()
    }

    /// Returns the icon every new task receives.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        DEFAULT_TASK_ICON
    }

    /// Returns the status every new task receives.
    #[must_use]
    pub fn status(&self) -> TaskStatus {
        TaskStatus::pending()
    }

    /// Builds the stored form of this task under `id`.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            user_id: self.owner_id,
            icon: DEFAULT_TASK_ICON.to_owned(),
            text: self.text,
            deadline: self.deadline,
            status: TaskStatus::pending(),
        }
    }
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted identifier.
    pub id: TaskId,
    /// Persisted owner reference.
    pub user_id: UserId,
    /// Persisted icon.
    pub icon: String,
    /// Persisted description.
    pub text: TaskText,
    /// Persisted deadline.
    pub deadline: Option<Deadline>,
    /// Persisted status.
    pub status: TaskStatus,
}

/// Persisted task.
///
/// Serialises as `{id, user_id, icon, text, date, status}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    user_id: UserId,
    icon: String,
    text: TaskText,
    #[serde(rename = "date")]
    deadline: Option<Deadline>,
    status: TaskStatus,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            user_id: data.user_id,
            icon: data.icon,
            text: data.text,
            deadline: data.deadline,
            status: data.status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the icon.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Returns the description.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<&Deadline> {
        self.deadline.as_ref()
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Replaces the status.
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
