//! In-memory mailer for notification tests.

use crate::notification::{
    domain::OutgoingMail,
    ports::{Mailer, MailerError, MailerResult},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Mailer that records messages instead of delivering them.
///
/// A failing instance rejects every message with a transport error, which
/// lets tests exercise the best-effort path without a mail server.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMailer {
    outbox: Arc<RwLock<Vec<OutgoingMail>>>,
    fail_deliveries: bool,
}

impl InMemoryMailer {
    /// Creates a mailer that accepts every well-addressed message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mailer whose transport always fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            outbox: Arc::default(),
            fail_deliveries: true,
        }
    }

    /// Returns the messages accepted so far.
    ///
    /// # Errors
    ///
    /// Returns [`MailerError::Transport`] when lock acquisition fails.
    pub fn sent(&self) -> MailerResult<Vec<OutgoingMail>> {
        let outbox = self
            .outbox
            .read()
            .map_err(|err| MailerError::transport(std::io::Error::other(err.to_string())))?;
        Ok(outbox.clone())
    }
}

#[async_trait]
impl Mailer for InMemoryMailer {
    async fn send(&self, mail: &OutgoingMail) -> MailerResult<()> {
        if !mail.to.contains('@') {
            return Err(MailerError::InvalidAddress(mail.to.clone()));
        }
        if self.fail_deliveries {
            return Err(MailerError::transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "mail relay unavailable",
            )));
        }
        let mut outbox = self
            .outbox
            .write()
            .map_err(|err| MailerError::transport(std::io::Error::other(err.to_string())))?;
        outbox.push(mail.clone());
        Ok(())
    }
}
