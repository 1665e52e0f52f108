//! Caller-facing error taxonomy.

use crate::task::{ports::TaskRepositoryError, services::TaskAssignmentError};
use crate::user::{
    ports::UserRepositoryError,
    services::{AuthenticationError, CredentialServiceError},
};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Outcome class of a failed request.
///
/// Every failure maps to exactly one variant with a stable message. Backend
/// details are logged where the error is converted and never carried here.
/// Serialises as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Missing or malformed caller input.
    #[error("{0}")]
    Validation(String),
    /// The email address belongs to another account.
    #[error("{0}")]
    DuplicateIdentity(String),
    /// The targeted record does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Unknown email or wrong password.
    #[error("Invalid credentials.")]
    InvalidCredentials,
    /// Any other backend failure.
    #[error("{0}")]
    Persistence(String),
}

impl ApiError {
    /// Returns the HTTP status code for this outcome.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::InvalidCredentials => 401,
            Self::NotFound(_) => 404,
            Self::DuplicateIdentity(_) => 409,
            Self::Persistence(_) => 500,
        }
    }

    /// Returns the caller-visible message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub(crate) fn from_authentication(err: &AuthenticationError) -> Self {
        match err {
            AuthenticationError::MissingCredentials => {
                Self::Validation("Email and password are required.".to_owned())
            }
            AuthenticationError::InvalidCredentials => Self::InvalidCredentials,
            AuthenticationError::Verification(_) | AuthenticationError::Repository(_) => {
                tracing::error!(error = %err, "login failed");
                Self::Persistence("Internal server error.".to_owned())
            }
        }
    }

    pub(crate) fn from_credentials(err: &CredentialServiceError, messages: &Messages) -> Self {
        match err {
            CredentialServiceError::Domain(_) => Self::Validation(messages.invalid.to_owned()),
            CredentialServiceError::InvalidRole(_) => {
                Self::Validation("Role must be either 'user' or 'admin'.".to_owned())
            }
            CredentialServiceError::Repository(UserRepositoryError::DuplicateEmail(_)) => {
                Self::DuplicateIdentity(messages.duplicate.to_owned())
            }
            CredentialServiceError::Repository(UserRepositoryError::NotFound(_)) => {
                Self::NotFound(messages.not_found.to_owned())
            }
            CredentialServiceError::Hashing(_)
            | CredentialServiceError::Repository(UserRepositoryError::Persistence(_)) => {
                tracing::error!(error = %err, "{}", messages.failure);
                Self::Persistence(messages.failure.to_owned())
            }
        }
    }

    pub(crate) fn from_tasks(err: &TaskAssignmentError, messages: &Messages) -> Self {
        match err {
            TaskAssignmentError::Domain(_) => Self::Validation(messages.invalid.to_owned()),
            TaskAssignmentError::Repository(TaskRepositoryError::NotFound(_)) => {
                Self::NotFound(messages.not_found.to_owned())
            }
            TaskAssignmentError::Repository(TaskRepositoryError::Persistence(_)) => {
                tracing::error!(error = %err, "{}", messages.failure);
                Self::Persistence(messages.failure.to_owned())
            }
        }
    }
}

impl Serialize for ApiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut body = serializer.serialize_struct("ApiError", 1)?;
        body.serialize_field("error", &self.message())?;
        body.end()
    }
}

/// Per-operation wording for each outcome class.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Messages {
    pub(crate) invalid: &'static str,
    pub(crate) duplicate: &'static str,
    pub(crate) not_found: &'static str,
    pub(crate) failure: &'static str,
}

impl Messages {
    pub(crate) const LIST_USERS: Self = Self::failing("Failed to fetch users from the database.");
    pub(crate) const CREATE_USER: Self = Self {
        invalid: "First name, last name, email, and password are required.",
        duplicate: "This email address is already registered.",
        not_found: "User not found.",
        failure: "An unexpected error occurred while creating the user.",
    };
    pub(crate) const UPDATE_USER: Self = Self {
        invalid: "First name, last name, email, and role are required fields.",
        duplicate: "This email address is already in use by another account.",
        not_found: "User not found or data is unchanged.",
        failure: "Failed to update user.",
    };
    pub(crate) const DELETE_USER: Self = Self {
        not_found: "User not found.",
        ..Self::failing("Failed to delete user.")
    };
    pub(crate) const LIST_TASKS: Self = Self::failing("Failed to fetch tasks");
    pub(crate) const USER_TASKS: Self = Self::failing("Failed to fetch tasks for user");
    pub(crate) const CREATE_TASK: Self = Self {
        invalid: "Owner and task text are required.",
        ..Self::failing("Failed to create task")
    };
    pub(crate) const UPDATE_TASK_STATUS: Self = Self {
        invalid: "Status is required",
        not_found: "Task not found",
        ..Self::failing("Failed to update task status")
    };

    const fn failing(failure: &'static str) -> Self {
        Self {
            invalid: "Invalid request.",
            duplicate: "Conflicting record.",
            not_found: "Not found.",
            failure,
        }
    }
}
