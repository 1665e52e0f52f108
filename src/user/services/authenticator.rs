//! Credential-based login.
//!
//! [`Authenticator::login`] answers "who is this and what may they do" for an
//! email/password pair. It deliberately returns the same
//! [`AuthenticationError::InvalidCredentials`] for an unknown address and a
//! wrong password so callers cannot probe which addresses are registered.
//!
//! No session or token is minted: callers receive the bare user id and role.
//! Treating that id as proof of identity on later requests is a known
//! weakness; it should be replaced by signed session tokens.

use crate::user::{
    domain::{EmailAddress, PlainPassword, Role, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Outcome of a successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Identifier of the authenticated user.
    pub id: UserId,
    /// Role of the authenticated user.
    pub role: Role,
}

/// Errors returned by [`Authenticator::login`].
#[derive(Debug, Error)]
pub enum AuthenticationError {
    /// Email or password was not supplied.
    #[error("email and password are required")]
    MissingCredentials,
    /// Unknown email or wrong password; the two are indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Password verification could not run.
    #[error("password verification failed: {0}")]
    Verification(String),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for login.
pub type AuthenticationResult<T> = Result<T, AuthenticationError>;

/// Resolves login attempts against the credential store.
#[derive(Clone)]
pub struct Authenticator<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> Authenticator<R>
where
    R: UserRepository,
{
    /// Creates a new authenticator.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Checks an email/password pair and returns the user's identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError::MissingCredentials`] when either field
    /// is empty, [`AuthenticationError::InvalidCredentials`] when the pair
    /// does not match a user, or [`AuthenticationError::Repository`] when the
    /// lookup fails.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> AuthenticationResult<AuthenticatedUser> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthenticationError::MissingCredentials);
        }
        let (Ok(address), Ok(secret)) = (EmailAddress::new(email), PlainPassword::new(password))
        else {
            return Err(AuthenticationError::InvalidCredentials);
        };

        let Some(user) = self.repository.find_by_email(&address).await? else {
            return Err(AuthenticationError::InvalidCredentials);
        };

        let digest = user.password().clone();
        let matches = tokio::task::spawn_blocking(move || digest.verify(&secret))
            .await
            .map_err(|err| AuthenticationError::Verification(err.to_string()))?;

        if !matches {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(AuthenticatedUser {
            id: user.id(),
            role: user.role(),
        })
    }
}
