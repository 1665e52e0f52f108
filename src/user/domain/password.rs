//! Password secrets and their one-way Argon2id digests.
//!
//! [`PasswordDigest::hash`] draws a fresh random salt for every call and
//! produces a PHC-format string (`$argon2id$v=19$...`) using fixed default
//! Argon2id cost parameters. [`PasswordDigest::verify`] re-derives the digest
//! from the salt and parameters embedded in that string.

use super::{PasswordHashingError, UserDomainError};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::fmt;

/// Plaintext password supplied by a caller.
///
/// The value is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct PlainPassword(String);

impl PlainPassword {
    /// Creates a password from caller input.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyPassword`] when the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(UserDomainError::EmptyPassword);
        }
        Ok(Self(raw))
    }

    /// Returns the plaintext for hashing or verification.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlainPassword(<redacted>)")
    }
}

/// Salted one-way digest of a password, in PHC string format.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Hashes a plaintext password with a freshly generated salt.
    ///
    /// This is deliberately slow; async callers should run it on a blocking
    /// thread.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordHashingError`] when the hasher rejects the input.
    pub fn hash(password: &PlainPassword) -> Result<Self, PasswordHashingError> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = Argon2::default()
            .hash_password(password.expose().as_bytes(), &salt)
            .map_err(PasswordHashingError::new)?;
        Ok(Self(digest.to_string()))
    }

    /// Wraps a digest loaded from storage.
    #[must_use]
    pub fn from_persisted(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Checks whether `password` produces this digest.
    ///
    /// A malformed stored digest never matches.
    #[must_use]
    pub fn verify(&self, password: &PlainPassword) -> bool {
        PasswordHash::new(&self.0).is_ok_and(|parsed| {
            Argon2::default()
                .verify_password(password.expose().as_bytes(), &parsed)
                .is_ok()
        })
    }

    /// Returns the PHC string for persistence.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(<redacted>)")
    }
}
