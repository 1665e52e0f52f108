//! Diesel row models for task persistence.

use super::schema::tasks;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Owning user reference.
    pub user_id: i64,
    /// Display icon.
    pub icon: String,
    /// Task description.
    pub text: String,
    /// Deadline, stored verbatim.
    pub date_info: Option<String>,
    /// Status.
    pub status: String,
}

/// Insert model for task records. The id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Owning user reference.
    pub user_id: i64,
    /// Display icon.
    pub icon: String,
    /// Task description.
    pub text: String,
    /// Deadline, stored verbatim.
    pub date_info: Option<String>,
    /// Initial status.
    pub status: String,
}
