//! Repository port for user persistence and lookup.

use crate::user::domain::{EmailAddress, NewUser, User, UserId, UserProfileUpdate, UserSummary};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every user, most recently created first, without digests.
    async fn list_all(&self) -> UserRepositoryResult<Vec<UserSummary>>;

    /// Stores a new user and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateEmail`] when the email address
    /// is already registered.
    async fn create(&self, user: &NewUser) -> UserRepositoryResult<User>;

    /// Overwrites the profile fields of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when no user has the id, or
    /// [`UserRepositoryError::DuplicateEmail`] when the new email belongs to
    /// another user.
    async fn update_profile(
        &self,
        id: UserId,
        update: &UserProfileUpdate,
    ) -> UserRepositoryResult<()>;

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when no user has the id.
    async fn remove(&self, id: UserId) -> UserRepositoryResult<()>;

    /// Finds a user, including the digest, by email address.
    ///
    /// Returns `None` when no user has the address.
    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>>;

    /// Finds a user, including the digest, by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// Another user already has this email address.
    #[error("duplicate email address: {0}")]
    DuplicateEmail(EmailAddress),

    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
