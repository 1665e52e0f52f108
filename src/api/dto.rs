//! Request and response bodies.
//!
//! Request fields are optional so an absent field can be told apart from a
//! malformed one; the facade turns absence into a validation error.

use crate::user::domain::{Role, UserId};
use serde::{Deserialize, Serialize};

/// Login credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginBody {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// Identity returned by a successful login.
///
/// This is not a session token; see [`crate::user::services::Authenticator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponse {
    /// Identifier of the authenticated user.
    pub id: UserId,
    /// Role of the authenticated user.
    pub role: Role,
    /// Human-readable outcome.
    pub message: String,
}

/// Registration fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBody {
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
    /// Privileged registration code.
    pub admin_code: Option<String>,
}

/// Outcome of a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserResponse {
    /// Identifier of the new user.
    pub id: UserId,
    /// Role granted to the new user.
    pub role: Role,
    /// Human-readable outcome.
    pub message: String,
}

/// Profile update fields. All are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserBody {
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Role (`user` or `admin`).
    pub role: Option<String>,
}

/// Task assignment fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Identifier of the assignee.
    #[serde(alias = "userId")]
    pub owner_id: Option<UserId>,
    /// Task description.
    pub text: Option<String>,
    /// Free-form deadline, stored verbatim.
    pub deadline: Option<String>,
}

/// Status change fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskStatusBody {
    /// New status, stored verbatim.
    pub status: Option<String>,
}

/// Acknowledgement carrying only a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

impl MessageResponse {
    /// Creates an acknowledgement.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
