//! Best-effort email notifications for task assignment.
//!
//! The notifier renders a plain-text and an HTML body for a newly assigned
//! task and hands the message to a [`ports::Mailer`]. Delivery failures are
//! logged and swallowed: a notification can never fail the operation that
//! triggered it. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
