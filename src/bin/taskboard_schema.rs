//! Prepares a `PostgreSQL` database for Taskboard.
//!
//! Usage:
//!
//! ```text
//! taskboard_schema
//! ```
//!
//! Configuration is read from the environment (and a `.env` file, when
//! present). The binary creates the `users` and `tasks` tables if they are
//! missing, then assembles the full service graph so that a broken mail or
//! pool configuration is reported before the front end is started. Running
//! it against an already prepared database is harmless.

use taskboard::{
    app::{self, StartupError},
    config::{ConfigError, TaskboardConfig},
    db,
    telemetry::{self, TelemetryError},
};
use thiserror::Error;
use tokio::runtime::Builder;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum SchemaError {
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Startup(#[from] StartupError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error("failed to obtain a connection: {0}")]
    Connection(#[source] diesel::r2d2::PoolError),
    #[error("failed to apply schema: {0}")]
    Apply(#[source] diesel::result::Error),
    #[error("schema task failed: {0}")]
    Join(#[source] tokio::task::JoinError),
}

fn main() -> Result<(), BoxError> {
    run().map_err(Into::into)
}

fn run() -> Result<(), SchemaError> {
    telemetry::init_tracing()?;
    let config = TaskboardConfig::from_env()?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(SchemaError::RuntimeInit)?;

    runtime.block_on(async {
        let (_api, pool) = app::build_api(&config)?;
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(SchemaError::Connection)?;
            db::apply_schema(&mut connection).map_err(SchemaError::Apply)
        })
        .await
        .map_err(SchemaError::Join)??;
        tracing::info!(port = config.port, "taskboard schema is ready");
        Ok(())
    })
}
