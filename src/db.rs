//! Connection pooling and schema bootstrap for `PostgreSQL`.

use crate::config::TaskboardConfig;
use diesel::PgConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};

/// `PostgreSQL` connection pool type.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// SQL that creates the `users` and `tasks` tables when they are absent.
pub const SCHEMA_SQL: &str =
    include_str!("../migrations/2025-01-01-000000_create_users_and_tasks/up.sql");

/// Builds a bounded connection pool from configuration.
///
/// At most `pool_max_size` connections are open at once; further callers wait
/// up to `pool_timeout` for one to be returned.
///
/// # Errors
///
/// Returns [`PoolError`] when the initial connections cannot be established.
pub fn build_pool(config: &TaskboardConfig) -> Result<PgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(config.database_url.as_str());
    Pool::builder()
        .max_size(config.pool_max_size)
        .connection_timeout(config.pool_timeout)
        .build(manager)
}

/// Applies [`SCHEMA_SQL`] on `connection`. Safe to run repeatedly.
///
/// This is blocking; call it from `spawn_blocking` or a synchronous context.
///
/// # Errors
///
/// Returns the Diesel error raised by the failing statement.
pub fn apply_schema(connection: &mut PgConnection) -> diesel::QueryResult<()> {
    connection.batch_execute(SCHEMA_SQL)
}
