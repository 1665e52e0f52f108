//! In-memory repository for credential tests.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{EmailAddress, NewUser, User, UserId, UserProfileUpdate, UserSummary},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
///
/// Identifiers are assigned from a counter starting at 1, mirroring a
/// database sequence.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: BTreeMap<UserId, User>,
    email_index: HashMap<EmailAddress, UserId>,
    last_id: i64,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> UserRepositoryResult<Vec<UserSummary>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.values().rev().map(User::summary).collect())
    }

    async fn create(&self, user: &NewUser) -> UserRepositoryResult<User> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.email_index.contains_key(&user.email) {
            return Err(UserRepositoryError::DuplicateEmail(user.email.clone()));
        }

        state.last_id += 1;
        let id = UserId::new(state.last_id);
        let stored = User::from_registration(id, user.clone());
        state.email_index.insert(user.email.clone(), id);
        state.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_profile(
        &self,
        id: UserId,
        update: &UserProfileUpdate,
    ) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let old_email = state
            .users
            .get(&id)
            .ok_or(UserRepositoryError::NotFound(id))?
            .email()
            .clone();

        if update.email != old_email {
            if let Some(&owner) = state.email_index.get(&update.email)
                && owner != id
            {
                return Err(UserRepositoryError::DuplicateEmail(update.email.clone()));
            }
            state.email_index.remove(&old_email);
            state.email_index.insert(update.email.clone(), id);
        }

        if let Some(user) = state.users.get_mut(&id) {
            user.apply_profile(update.clone());
        }
        Ok(())
    }

    async fn remove(&self, id: UserId) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let removed = state
            .users
            .remove(&id)
            .ok_or(UserRepositoryError::NotFound(id))?;
        state.email_index.remove(removed.email());
        Ok(())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .email_index
            .get(email)
            .and_then(|id| state.users.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.get(&id).cloned())
    }
}
