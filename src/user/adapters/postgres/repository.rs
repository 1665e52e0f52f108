//! `PostgreSQL` repository implementation for credential storage.

use super::{
    models::{NewUserRow, UserProfileChangeset, UserRow},
    schema::users,
};
use crate::db::PgPool;
use crate::user::{
    domain::{
        EmailAddress, NewUser, PasswordDigest, PersistedUserData, PersonName, Role, User, UserId,
        UserProfileUpdate, UserSummary,
    },
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// Name of the unique constraint guarding `users.email`.
const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(UserRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(UserRepositoryError::persistence)?
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list_all(&self) -> UserRepositoryResult<Vec<UserSummary>> {
        self.run_blocking(move |connection| {
            let rows = users::table
                .order(users::id.desc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?;
            rows.into_iter()
                .map(|row| row_to_user(row).map(|user| user.summary()))
                .collect()
        })
        .await
    }

    async fn create(&self, user: &NewUser) -> UserRepositoryResult<User> {
        let email = user.email.clone();
        let new_row = to_new_row(user);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(users::table)
                .values(&new_row)
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(connection)
                .map_err(|err| map_write_error(err, &email))?;
            row_to_user(row)
        })
        .await
    }

    async fn update_profile(
        &self,
        id: UserId,
        update: &UserProfileUpdate,
    ) -> UserRepositoryResult<()> {
        let email = update.email.clone();
        let changeset = UserProfileChangeset {
            first_name: update.first_name.as_str().to_owned(),
            last_name: update.last_name.as_str().to_owned(),
            email: update.email.as_str().to_owned(),
            role: update.role.as_str().to_owned(),
        };

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(users::table.filter(users::id.eq(id.value())))
                .set(&changeset)
                .execute(connection)
                .map_err(|err| map_write_error(err, &email))?;

            if updated_count == 0 {
                return Err(UserRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn remove(&self, id: UserId) -> UserRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count = diesel::delete(users::table.filter(users::id.eq(id.value())))
                .execute(connection)
                .map_err(UserRepositoryError::persistence)?;

            if deleted_count == 0 {
                return Err(UserRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        let lookup = email.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::email.eq(&lookup))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::id.eq(id.value()))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }
}

fn to_new_row(user: &NewUser) -> NewUserRow {
    NewUserRow {
        first_name: user.first_name.as_str().to_owned(),
        last_name: user.last_name.as_str().to_owned(),
        email: user.email.as_str().to_owned(),
        password: user.password.as_str().to_owned(),
        role: user.role.as_str().to_owned(),
        created_at: user.created_at,
    }
}

fn row_to_user(row: UserRow) -> UserRepositoryResult<User> {
    let UserRow {
        id,
        first_name,
        last_name,
        email,
        password,
        role,
        created_at,
    } = row;

    let data = PersistedUserData {
        id: UserId::new(id),
        first_name: PersonName::first(first_name).map_err(UserRepositoryError::persistence)?,
        last_name: PersonName::last(last_name).map_err(UserRepositoryError::persistence)?,
        email: EmailAddress::new(email).map_err(UserRepositoryError::persistence)?,
        password: PasswordDigest::from_persisted(password),
        role: Role::try_from(role.as_str()).map_err(UserRepositoryError::persistence)?,
        created_at,
    };
    Ok(User::from_persisted(data))
}

fn map_write_error(err: DieselError, email: &EmailAddress) -> UserRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if is_email_unique_violation(info.as_ref()) =>
        {
            UserRepositoryError::DuplicateEmail(email.clone())
        }
        _ => UserRepositoryError::persistence(err),
    }
}

fn is_email_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == EMAIL_UNIQUE_CONSTRAINT)
}
