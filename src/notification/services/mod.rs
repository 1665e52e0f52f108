//! Application services for task notifications.

mod notifier;

pub use notifier::AssignmentNotifier;
