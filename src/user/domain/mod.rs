//! Domain model for user credentials.
//!
//! Users carry a name, a unique email address, a salted password digest, and
//! a role. Plaintext passwords only exist transiently inside
//! [`PlainPassword`] and are never persisted.

mod error;
mod ids;
mod password;
mod user;

pub use error::{ParseRoleError, PasswordHashingError, UserDomainError};
pub use ids::UserId;
pub use password::{PasswordDigest, PlainPassword};
pub use user::{
    EmailAddress, NewUser, PersistedUserData, PersonName, Role, User, UserProfileUpdate,
    UserSummary,
};
