//! Diesel row models for credential persistence.

use super::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Password digest.
    pub password: String,
    /// Role.
    pub role: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for user records. The id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Password digest.
    pub password: String,
    /// Role.
    pub role: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// Changeset for profile updates. The password column is absent.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserProfileChangeset {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Role.
    pub role: String,
}
