//! SMTP mail transport backed by `lettre`.

use crate::config::MailConfig;
use crate::notification::{
    domain::OutgoingMail,
    ports::{Mailer, MailerError, MailerResult},
};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use std::fmt;

/// Mailer that relays through an authenticated STARTTLS SMTP server.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    relay: String,
}

impl SmtpMailer {
    /// Builds a relay transport from mail settings.
    ///
    /// No connection is made until the first message is sent.
    ///
    /// # Errors
    ///
    /// Returns [`MailerError::Transport`] when the relay host is unusable.
    pub fn new(config: &MailConfig) -> MailerResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(MailerError::transport)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            relay: format!("{}:{}", config.smtp_host, config.smtp_port),
        })
    }
}

impl fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("relay", &self.relay)
            .finish_non_exhaustive()
    }
}

fn parse_mailbox(raw: &str) -> MailerResult<Mailbox> {
    raw.parse::<Mailbox>()
        .map_err(|_| MailerError::InvalidAddress(raw.to_owned()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: &OutgoingMail) -> MailerResult<()> {
        let message = Message::builder()
            .from(parse_mailbox(&mail.from)?)
            .to(parse_mailbox(&mail.to)?)
            .subject(mail.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                mail.text_body.clone(),
                mail.html_body.clone(),
            ))
            .map_err(MailerError::transport)?;

        self.transport
            .send(message)
            .await
            .map_err(MailerError::transport)?;
        Ok(())
    }
}
