//! Port contracts for credential storage.

pub mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
