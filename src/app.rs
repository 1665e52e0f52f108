//! Production wiring: configuration to a ready [`TaskboardApi`].

use crate::api::TaskboardApi;
use crate::config::TaskboardConfig;
use crate::db::{self, PgPool};
use crate::notification::{
    adapters::smtp::SmtpMailer, ports::MailerError, services::AssignmentNotifier,
};
use crate::task::adapters::postgres::PostgresTaskRepository;
use crate::user::{adapters::postgres::PostgresUserRepository, services::RegistrationPolicy};
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;

/// [`TaskboardApi`] backed by `PostgreSQL` and SMTP.
pub type PostgresTaskboardApi =
    TaskboardApi<PostgresUserRepository, PostgresTaskRepository, SmtpMailer, DefaultClock>;

/// Errors raised while assembling the service.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The connection pool could not be built.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The mail transport could not be built.
    #[error("failed to build mail transport: {0}")]
    Mailer(#[from] MailerError),
}

/// Builds the pool, repositories, and mail transport from configuration.
///
/// # Errors
///
/// Returns [`StartupError`] when the pool or mail transport cannot be built.
pub fn build_api(
    config: &TaskboardConfig,
) -> Result<(PostgresTaskboardApi, PgPool), StartupError> {
    let pool = db::build_pool(config)?;
    let mailer = SmtpMailer::new(&config.mail)?;
    tracing::info!(
        pool_max_size = config.pool_max_size,
        smtp_host = %config.mail.smtp_host,
        admin_code_configured = config.admin_registration_code.is_some(),
        "assembled taskboard services"
    );

    let api = TaskboardApi::new(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(PostgresTaskRepository::new(pool.clone())),
        AssignmentNotifier::new(Arc::new(mailer), config.mail.sender()),
        Arc::new(DefaultClock),
        RegistrationPolicy::new(config.admin_registration_code.clone()),
    );
    Ok((api, pool))
}
