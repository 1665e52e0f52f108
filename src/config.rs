//! Runtime configuration for Taskboard.
//!
//! Settings are read once at startup and handed to components through their
//! constructors. [`TaskboardConfig::from_env`] reads the process environment
//! (after loading a `.env` file when present); [`TaskboardConfig::from_lookup`]
//! accepts any key lookup so tests never touch global state.

use crate::notification::domain::MailSender;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_FROM_NAME: &str = "Project Taskboard";
const DEFAULT_PORT: u16 = 3000;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is absent or empty.
    #[error("missing required setting {0}")]
    Missing(&'static str),

    /// A variable is present but cannot be parsed.
    #[error("invalid value for {key}: {value:?}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Outbound mail settings.
#[derive(Clone, PartialEq, Eq)]
pub struct MailConfig {
    /// SMTP relay host.
    pub smtp_host: String,
    /// SMTP relay port (STARTTLS).
    pub smtp_port: u16,
    /// Relay account, also used as the sender address.
    pub username: String,
    /// Relay account secret.
    pub password: String,
    /// Display name of the sender.
    pub from_name: String,
}

impl MailConfig {
    /// Returns the sender identity for outgoing mail.
    #[must_use]
    pub fn sender(&self) -> MailSender {
        MailSender::new(self.from_name.clone(), self.username.clone())
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from_name", &self.from_name)
            .finish()
    }
}

/// Complete service configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct TaskboardConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Maximum number of pooled connections.
    pub pool_max_size: u32,
    /// How long a caller waits for a pooled connection.
    pub pool_timeout: Duration,
    /// Shared secret that elevates a registration to admin, if configured.
    pub admin_registration_code: Option<String>,
    /// Outbound mail settings.
    pub mail: MailConfig,
    /// Listening port for the HTTP front end.
    pub port: u16,
}

impl fmt::Debug for TaskboardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskboardConfig")
            .field("database_url", &"<redacted>")
            .field("pool_max_size", &self.pool_max_size)
            .field("pool_timeout", &self.pool_timeout)
            .field(
                "admin_registration_code",
                &self.admin_registration_code.as_ref().map(|_| "<redacted>"),
            )
            .field("mail", &self.mail)
            .field("port", &self.port)
            .finish()
    }
}

impl TaskboardConfig {
    /// Reads configuration from the environment, loading `.env` first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    ///
    /// Empty values are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// numeric variable cannot be parsed.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let pool_max_size = parse_or(&get, "DB_POOL_SIZE", DEFAULT_POOL_MAX_SIZE)?;
        if pool_max_size == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_POOL_SIZE",
                value: "0".to_owned(),
            });
        }
        let pool_timeout_secs = parse_or(&get, "DB_POOL_TIMEOUT_SECS", DEFAULT_POOL_TIMEOUT_SECS)?;

        let mail = MailConfig {
            smtp_host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_owned()),
            smtp_port: parse_or(&get, "SMTP_PORT", DEFAULT_SMTP_PORT)?,
            username: get("EMAIL_USER").unwrap_or_default(),
            password: get("EMAIL_PASS").unwrap_or_default(),
            from_name: get("MAIL_FROM_NAME").unwrap_or_else(|| DEFAULT_FROM_NAME.to_owned()),
        };

        Ok(Self {
            database_url,
            pool_max_size,
            pool_timeout: Duration::from_secs(pool_timeout_secs),
            admin_registration_code: get("ADMIN_REGISTRATION_CODE"),
            mail,
            port: parse_or(&get, "PORT", DEFAULT_PORT)?,
        })
    }
}

fn parse_or<T>(
    get: &dyn Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    get(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value })
    })
}
