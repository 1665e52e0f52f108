//! Service layer for user registration and profile management.

use crate::user::{
    domain::{
        EmailAddress, NewUser, ParseRoleError, PasswordDigest, PasswordHashingError, PersonName,
        PlainPassword, Role, User, UserDomainError, UserId, UserProfileUpdate, UserSummary,
    },
    ports::{UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    admin_code: Option<String>,
}

impl RegisterUserRequest {
    /// Creates a request with the required registration fields.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
            admin_code: None,
        }
    }

    /// Supplies a privileged registration code.
    #[must_use]
    pub fn with_admin_code(mut self, code: impl Into<String>) -> Self {
        self.admin_code = Some(code.into());
        self
    }
}

/// Request payload for updating a user's profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserRequest {
    id: UserId,
    first_name: String,
    last_name: String,
    email: String,
    role: String,
}

impl UpdateUserRequest {
    /// Creates an update request. All fields are required.
    #[must_use]
    pub fn new(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

/// Decides the role of a new registration.
///
/// Registrations become `admin` only when they present a code that exactly
/// matches the configured one. Without a configured code nobody is elevated.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationPolicy {
    admin_code: Option<String>,
}

impl RegistrationPolicy {
    /// Creates a policy. An empty code disables elevation.
    #[must_use]
    pub fn new(admin_code: Option<String>) -> Self {
        Self {
            admin_code: admin_code.filter(|code| !code.is_empty()),
        }
    }

    /// Resolves the role for a registration presenting `supplied`.
    #[must_use]
    pub fn resolve_role(&self, supplied: Option<&str>) -> Role {
        match (self.admin_code.as_deref(), supplied) {
            (Some(expected), Some(actual)) if expected == actual => Role::Admin,
            _ => Role::User,
        }
    }
}

impl std::fmt::Debug for RegistrationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationPolicy")
            .field("admin_code_configured", &self.admin_code.is_some())
            .finish()
    }
}

/// Service-level errors for credential operations.
#[derive(Debug, Error)]
pub enum CredentialServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// The role string is not a known role.
    #[error(transparent)]
    InvalidRole(#[from] ParseRoleError),
    /// The password could not be hashed.
    #[error(transparent)]
    Hashing(#[from] PasswordHashingError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for credential service operations.
pub type CredentialServiceResult<T> = Result<T, CredentialServiceError>;

/// Credential store orchestration service.
#[derive(Clone)]
pub struct CredentialService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    policy: RegistrationPolicy,
}

impl<R, C> CredentialService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new credential service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, policy: RegistrationPolicy) -> Self {
        Self {
            repository,
            clock,
            policy,
        }
    }

    /// Returns all users, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialServiceError::Repository`] when the lookup fails.
    pub async fn list_all(&self) -> CredentialServiceResult<Vec<UserSummary>> {
        Ok(self.repository.list_all().await?)
    }

    /// Registers a new user, hashing the password before it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialServiceError::Domain`] when a required field is
    /// blank, or [`CredentialServiceError::Repository`] wrapping
    /// [`UserRepositoryError::DuplicateEmail`] when the address is taken.
    pub async fn register(&self, request: RegisterUserRequest) -> CredentialServiceResult<User> {
        let first_name = PersonName::first(request.first_name)?;
        let last_name = PersonName::last(request.last_name)?;
        let email = EmailAddress::new(request.email)?;
        let password = PlainPassword::new(request.password)?;
        let role = self.policy.resolve_role(request.admin_code.as_deref());

        let digest = tokio::task::spawn_blocking(move || PasswordDigest::hash(&password))
            .await
            .map_err(PasswordHashingError::new)??;

        let registration = NewUser {
            first_name,
            last_name,
            email,
            password: digest,
            role,
            created_at: self.clock.utc(),
        };
        let user = self.repository.create(&registration).await?;
        tracing::info!(user_id = %user.id(), role = %user.role(), "registered user");
        Ok(user)
    }

    /// Updates a user's name, email, and role. The password is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialServiceError::Domain`] or
    /// [`CredentialServiceError::InvalidRole`] for bad input, and
    /// [`CredentialServiceError::Repository`] for missing users, email
    /// collisions, or persistence failures.
    pub async fn update(&self, request: UpdateUserRequest) -> CredentialServiceResult<()> {
        let update = UserProfileUpdate {
            first_name: PersonName::first(request.first_name)?,
            last_name: PersonName::last(request.last_name)?,
            email: EmailAddress::new(request.email)?,
            role: Role::try_from(request.role.as_str())?,
        };
        self.repository.update_profile(request.id, &update).await?;
        Ok(())
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialServiceError::Repository`] wrapping
    /// [`UserRepositoryError::NotFound`] when the user does not exist.
    pub async fn remove(&self, id: UserId) -> CredentialServiceResult<()> {
        self.repository.remove(id).await?;
        tracing::info!(user_id = %id, "removed user");
        Ok(())
    }

    /// Finds a user by email address.
    ///
    /// Returns `Ok(None)` when no user has the address.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialServiceError::Domain`] when the address is blank,
    /// or [`CredentialServiceError::Repository`] when the lookup fails.
    pub async fn find_by_email(&self, email: &str) -> CredentialServiceResult<Option<User>> {
        let address = EmailAddress::new(email)?;
        Ok(self.repository.find_by_email(&address).await?)
    }

    /// Finds a user by identifier.
    ///
    /// Returns `Ok(None)` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialServiceError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: UserId) -> CredentialServiceResult<Option<User>> {
        Ok(self.repository.find_by_id(id).await?)
    }
}
