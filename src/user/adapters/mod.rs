//! Adapter implementations for credential storage.

pub mod memory;
pub mod postgres;
