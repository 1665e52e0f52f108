//! Task storage and assignment for Taskboard.
//!
//! Administrators assign tasks to users; every new task starts `Pending` with
//! the default icon, and its owner is notified by email on a best-effort
//! basis. Users then move their tasks through caller-defined statuses. The
//! module follows hexagonal architecture:
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
