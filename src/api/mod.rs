//! Request/response contract for the Taskboard front end.
//!
//! [`TaskboardApi`] exposes one method per external operation. Bodies are
//! plain serde types in [`dto`], and every failure is an [`ApiError`] that
//! carries an HTTP status and a stable message. The HTTP framework itself
//! lives outside this crate.

pub mod dto;
pub mod error;
mod facade;

pub use error::{ApiError, ApiResult};
pub use facade::TaskboardApi;

#[cfg(test)]
mod tests;
