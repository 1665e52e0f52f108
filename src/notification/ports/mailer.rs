//! Mail delivery port.

use crate::notification::domain::OutgoingMail;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for mail delivery.
pub type MailerResult<T> = Result<T, MailerError>;

/// Outbound mail transport contract.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers a rendered message.
    ///
    /// # Errors
    ///
    /// Returns [`MailerError::InvalidAddress`] when a mailbox cannot be
    /// parsed, or [`MailerError::Transport`] when delivery fails.
    async fn send(&self, mail: &OutgoingMail) -> MailerResult<()>;
}

/// Errors returned by mail transports.
#[derive(Debug, Clone, Error)]
pub enum MailerError {
    /// A sender or recipient mailbox is malformed.
    #[error("invalid mailbox: {0}")]
    InvalidAddress(String),

    /// The transport could not be built or rejected the message.
    #[error("mail transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl MailerError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
