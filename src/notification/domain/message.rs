//! Rendering of the "new task assigned" message.

use super::{MailSender, OutgoingMail};
use crate::task::domain::{Deadline, Task};
use minijinja::{Environment, context};

const TEXT_TEMPLATE_NAME: &str = "assignment.txt";
const HTML_TEMPLATE_NAME: &str = "assignment.html";

const TEXT_TEMPLATE: &str = "Hello,

A new task has been assigned to you:

Task: {{ task_text }}
Deadline: {{ deadline }}

Please log in to view your taskboard.

Thank you!";

const HTML_TEMPLATE: &str = r#"<div style="font-family: Arial, sans-serif; line-height: 1.6;">
  <h2>New Task Assigned!</h2>
  <p>Hello,</p>
  <p>A new task has been assigned to you by an administrator.</p>
  <hr>
  <h3>Task Details:</h3>
  <p><strong>Task:</strong> {{ task_text }}</p>
  <p><strong>Deadline:</strong> {{ deadline }}</p>
  <hr>
  <p>Please log in to your dashboard to view more details and update the status.</p>
  <p>Thank you!</p>
</div>"#;

/// Shown when a task has no deadline.
const NO_DEADLINE: &str = "Not specified";

/// Rendered bodies of an assignment notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentMessage {
    /// Plain-text body.
    pub text_body: String,
    /// HTML body. Task text is HTML-escaped.
    pub html_body: String,
}

impl AssignmentMessage {
    /// Subject line of every assignment notification.
    pub const SUBJECT: &'static str = "New Task Assigned to You!";

    /// Renders both bodies for `task`.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when a template fails to render.
    pub fn render(task: &Task) -> Result<Self, minijinja::Error> {
        let mut environment = Environment::new();
        environment.add_template(TEXT_TEMPLATE_NAME, TEXT_TEMPLATE)?;
        environment.add_template(HTML_TEMPLATE_NAME, HTML_TEMPLATE)?;

        let values = context! {
            task_text => task.text().as_str(),
            deadline => format_deadline(task.deadline()),
        };
        let text_body = environment
            .get_template(TEXT_TEMPLATE_NAME)?
            .render(&values)?;
        let html_body = environment
            .get_template(HTML_TEMPLATE_NAME)?
            .render(&values)?;

        Ok(Self {
            text_body,
            html_body,
        })
    }

    /// Addresses the rendered message from `sender` to `recipient`.
    #[must_use]
    pub fn into_mail(self, sender: &MailSender, recipient: &str) -> OutgoingMail {
        OutgoingMail {
            from: sender.mailbox(),
            to: recipient.to_owned(),
            subject: Self::SUBJECT.to_owned(),
            text_body: self.text_body,
            html_body: self.html_body,
        }
    }
}

/// Formats a deadline for humans, e.g. `January 1, 2025 at 10:00 AM`.
///
/// Machine-readable deadlines are rendered in UTC. Anything else is shown as
/// stored.
#[must_use]
pub fn format_deadline(deadline: Option<&Deadline>) -> String {
    let Some(value) = deadline else {
        return NO_DEADLINE.to_owned();
    };
    value.instant().map_or_else(
        || value.as_str().to_owned(),
        |instant| instant.format("%B %-d, %Y at %-I:%M %p").to_string(),
    )
}
