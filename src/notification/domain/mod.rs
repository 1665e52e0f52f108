//! Domain model for outbound notifications.

mod mail;
mod message;

pub use mail::{MailSender, OutgoingMail};
pub use message::{AssignmentMessage, format_deadline};
