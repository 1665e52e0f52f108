//! Shared test helpers for in-memory API integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    api::{
        TaskboardApi,
        dto::{CreateTaskBody, CreateUserBody},
    },
    notification::{
        adapters::memory::InMemoryMailer, domain::MailSender, services::AssignmentNotifier,
    },
    task::adapters::memory::InMemoryTaskRepository,
    user::{adapters::memory::InMemoryUserRepository, domain::UserId, services::RegistrationPolicy},
};

/// Privileged registration code configured for every test API.
pub const ADMIN_CODE: &str = "s3cret-admin";

/// API type backed entirely by in-memory adapters.
pub type MemoryApi =
    TaskboardApi<InMemoryUserRepository, InMemoryTaskRepository, InMemoryMailer, DefaultClock>;

/// API under test plus a handle on its outbox.
pub struct Board {
    pub api: MemoryApi,
    pub mailer: Arc<InMemoryMailer>,
}

/// Provides a fresh API with empty stores for each test.
#[fixture]
pub fn board() -> Board {
    let mailer = Arc::new(InMemoryMailer::new());
    let api = TaskboardApi::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryTaskRepository::new()),
        AssignmentNotifier::new(
            Arc::clone(&mailer),
            MailSender::new("Project Taskboard", "board@example.com"),
        ),
        Arc::new(DefaultClock),
        RegistrationPolicy::new(Some(ADMIN_CODE.to_owned())),
    );
    Board { api, mailer }
}

/// Builds a complete registration body.
#[must_use]
pub fn signup(first_name: &str, last_name: &str, email: &str, password: &str) -> CreateUserBody {
    CreateUserBody {
        first_name: Some(first_name.to_owned()),
        last_name: Some(last_name.to_owned()),
        email: Some(email.to_owned()),
        password: Some(password.to_owned()),
        admin_code: None,
    }
}

/// Builds a task assignment body.
#[must_use]
pub fn assignment(owner: i64, text: &str, deadline: Option<&str>) -> CreateTaskBody {
    CreateTaskBody {
        owner_id: Some(UserId::new(owner)),
        text: Some(text.to_owned()),
        deadline: deadline.map(str::to_owned),
    }
}
