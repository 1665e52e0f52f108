//! Credential management and authentication for Taskboard.
//!
//! This module owns user records: registration with hashed passwords,
//! profile updates, removal, and credential-based login. Role elevation to
//! `admin` happens only when a registration supplies the configured
//! privileged registration code. The module follows hexagonal architecture:
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
