//! User aggregate and related credential types.

use super::{ParseRoleError, PasswordDigest, UserDomainError, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authorization role attached to a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular user who manages their own tasks.
    #[default]
    User,
    /// Administrator who manages users and assigns tasks.
    Admin,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-empty first or last name, stored as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Creates a validated first name.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyFirstName`] when the value is blank.
    pub fn first(value: impl Into<String>) -> Result<Self, UserDomainError> {
        Self::parse(value.into(), UserDomainError::EmptyFirstName)
    }

    /// Creates a validated last name.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyLastName`] when the value is blank.
    pub fn last(value: impl Into<String>) -> Result<Self, UserDomainError> {
        Self::parse(value.into(), UserDomainError::EmptyLastName)
    }

    fn parse(raw: String, blank_error: UserDomainError) -> Result<Self, UserDomainError> {
        if raw.trim().is_empty() {
            return Err(blank_error);
        }
        Ok(Self(raw))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address identifying a user. Compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyEmail`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(UserDomainError::EmptyEmail);
        }
        Ok(Self(raw))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated registration ready to be persisted. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// First name.
    pub first_name: PersonName,
    /// Last name.
    pub last_name: PersonName,
    /// Unique email address.
    pub email: EmailAddress,
    /// Salted password digest.
    pub password: PasswordDigest,
    /// Assigned role.
    pub role: Role,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// Profile fields that may change after registration. The password is not
/// one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfileUpdate {
    /// New first name.
    pub first_name: PersonName,
    /// New last name.
    pub last_name: PersonName,
    /// New email address.
    pub email: EmailAddress,
    /// New role.
    pub role: Role,
}

/// Parameter object for reconstructing a persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted identifier.
    pub id: UserId,
    /// Persisted first name.
    pub first_name: PersonName,
    /// Persisted last name.
    pub last_name: PersonName,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted password digest.
    pub password: PasswordDigest,
    /// Persisted role.
    pub role: Role,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// User aggregate, including the password digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    first_name: PersonName,
    last_name: PersonName,
    email: EmailAddress,
    password: PasswordDigest,
    role: Role,
    created_at: DateTime<Utc>,
}

impl User {
    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            password: data.password,
            role: data.role,
            created_at: data.created_at,
        }
    }

    /// Builds the stored form of a freshly registered user.
    #[must_use]
    pub fn from_registration(id: UserId, registration: NewUser) -> Self {
        Self {
            id,
            first_name: registration.first_name,
            last_name: registration.last_name,
            email: registration.email,
            password: registration.password,
            role: registration.role,
            created_at: registration.created_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the first name.
    #[must_use]
    pub const fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub const fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the password digest.
    #[must_use]
    pub const fn password(&self) -> &PasswordDigest {
        &self.password
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies a profile update, leaving the password untouched.
    pub fn apply_profile(&mut self, update: UserProfileUpdate) {
        self.first_name = update.first_name;
        self.last_name = update.last_name;
        self.email = update.email;
        self.role = update.role;
    }

    /// Returns the listing view of this user, without the digest.
    #[must_use]
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Listing view of a user. Never carries the password digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// User identifier.
    pub id: UserId,
    /// First name.
    pub first_name: PersonName,
    /// Last name.
    pub last_name: PersonName,
    /// Email address.
    pub email: EmailAddress,
    /// Role.
    pub role: Role,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}
