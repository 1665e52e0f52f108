//! Taskboard: user accounts, task assignment, and assignment notifications.
//!
//! Administrators register users and assign them tasks; users log in, list
//! their tasks, and move them through statuses of their choosing. Each newly
//! assigned task triggers a best-effort email to its owner.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, SMTP,
//!   in-memory)
//!
//! # Modules
//!
//! - [`user`]: Credential storage and login
//! - [`task`]: Task storage and assignment orchestration
//! - [`notification`]: Assignment emails
//! - [`api`]: Request/response contract and error taxonomy
//! - [`config`], [`db`], [`app`], [`telemetry`]: Startup and wiring

pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod notification;
pub mod task;
pub mod telemetry;
pub mod user;
