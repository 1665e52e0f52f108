//! Error types for user domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The first name is empty after trimming.
    #[error("first name must not be empty")]
    EmptyFirstName,

    /// The last name is empty after trimming.
    #[error("last name must not be empty")]
    EmptyLastName,

    /// The email address is empty after trimming.
    #[error("email must not be empty")]
    EmptyEmail,

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Error returned while parsing a role from persistence or caller input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// Error returned when a password cannot be hashed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashingError(String);

impl PasswordHashingError {
    /// Creates a hashing error from any displayable cause.
    pub fn new(cause: impl std::fmt::Display) -> Self {
        Self(cause.to_string())
    }
}
