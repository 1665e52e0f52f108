//! Shared world state for task assignment BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    api::{ApiResult, TaskboardApi, dto::MessageResponse},
    notification::{
        adapters::memory::InMemoryMailer, domain::MailSender, services::AssignmentNotifier,
    },
    task::{adapters::memory::InMemoryTaskRepository, domain::Task},
    user::{adapters::memory::InMemoryUserRepository, services::RegistrationPolicy},
};

/// API type used by the BDD world.
pub type TestApi =
    TaskboardApi<InMemoryUserRepository, InMemoryTaskRepository, InMemoryMailer, DefaultClock>;

/// Scenario world for task assignment behaviour tests.
pub struct TaskAssignmentWorld {
    pub api: TestApi,
    pub mailer: Arc<InMemoryMailer>,
    pub last_created_task: Option<Task>,
    pub last_status_update: Option<ApiResult<MessageResponse>>,
}

impl TaskAssignmentWorld {
    /// Creates a world whose notifications go through `mailer`.
    #[must_use]
    pub fn with_mailer(mailer: InMemoryMailer) -> Self {
        let outbox = Arc::new(mailer);
        let api = TaskboardApi::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryTaskRepository::new()),
            AssignmentNotifier::new(
                Arc::clone(&outbox),
                MailSender::new("Project Taskboard", "board@example.com"),
            ),
            Arc::new(DefaultClock),
            RegistrationPolicy::default(),
        );

        Self {
            api,
            mailer: outbox,
            last_created_task: None,
            last_status_update: None,
        }
    }
}

impl Default for TaskAssignmentWorld {
    fn default() -> Self {
        Self::with_mailer(InMemoryMailer::new())
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskAssignmentWorld {
    TaskAssignmentWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
