//! Adapter implementations for outbound mail delivery.

pub mod memory;
pub mod smtp;
