//! Outbound mail envelope and sender identity.

use serde::{Deserialize, Serialize};

/// Identity that outbound notifications are sent from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailSender {
    name: String,
    address: String,
}

impl MailSender {
    /// Creates a sender identity.
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the mailbox address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Formats the sender as an RFC 5322 mailbox, e.g. `"Name" <addr>`.
    #[must_use]
    pub fn mailbox(&self) -> String {
        format!("\"{}\" <{}>", self.name, self.address)
    }
}

/// A fully rendered message ready for a [`crate::notification::ports::Mailer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMail {
    /// Sender mailbox.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub text_body: String,
    /// HTML body.
    pub html_body: String,
}
