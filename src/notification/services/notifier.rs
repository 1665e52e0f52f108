//! Best-effort assignment notifications.

use crate::notification::{
    domain::{AssignmentMessage, MailSender},
    ports::Mailer,
};
use crate::task::domain::Task;
use std::sync::Arc;

/// Sends "new task assigned" emails without ever failing the caller.
#[derive(Clone)]
pub struct AssignmentNotifier<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
    sender: MailSender,
}

impl<M> AssignmentNotifier<M>
where
    M: Mailer,
{
    /// Creates a notifier that sends as `sender` through `mailer`.
    #[must_use]
    pub const fn new(mailer: Arc<M>, sender: MailSender) -> Self {
        Self { mailer, sender }
    }

    /// Tells `address` that `task` has been assigned to them.
    ///
    /// Rendering and delivery failures are logged and discarded. Nothing is
    /// retried or queued.
    pub async fn notify_assignment(&self, address: &str, task: &Task) {
        let message = match AssignmentMessage::render(task) {
            Ok(message) => message,
            Err(err) => {
                tracing::error!(task_id = %task.id(), error = %err, "failed to render task notification");
                return;
            }
        };

        let mail = message.into_mail(&self.sender, address);
        match self.mailer.send(&mail).await {
            Ok(()) => {
                tracing::info!(task_id = %task.id(), recipient = %address, "sent task notification");
            }
            Err(err) => {
                tracing::error!(
                    task_id = %task.id(),
                    recipient = %address,
                    error = %err,
                    "failed to send task notification"
                );
            }
        }
    }
}
