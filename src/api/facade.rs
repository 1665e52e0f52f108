//! Request-level entry points, one per external operation.

use super::{
    dto::{
        CreateTaskBody, CreateUserBody, CreateUserResponse, LoginBody, LoginResponse,
        MessageResponse, UpdateTaskStatusBody, UpdateUserBody,
    },
    error::{ApiError, ApiResult, Messages},
};
use crate::notification::{ports::Mailer, services::AssignmentNotifier};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskAssignmentService, UpdateTaskStatusRequest},
};
use crate::user::{
    domain::{UserId, UserSummary},
    ports::UserRepository,
    services::{
        Authenticator, CredentialService, RegisterUserRequest, RegistrationPolicy,
        UpdateUserRequest,
    },
};
use mockable::Clock;
use std::sync::Arc;

/// Returns the value when it is present and non-empty.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.is_empty())
}

/// Taskboard request handling, independent of any HTTP framework.
///
/// Each method validates its body, delegates to the owning service, and maps
/// failures onto [`ApiError`].
#[derive(Clone)]
pub struct TaskboardApi<U, T, M, C>
where
    U: UserRepository,
    T: TaskRepository,
    M: Mailer,
    C: Clock + Send + Sync,
{
    credentials: CredentialService<U, C>,
    authenticator: Authenticator<U>,
    tasks: TaskAssignmentService<T, U, M>,
}

impl<U, T, M, C> TaskboardApi<U, T, M, C>
where
    U: UserRepository,
    T: TaskRepository,
    M: Mailer,
    C: Clock + Send + Sync,
{
    /// Wires the services over the given stores.
    #[must_use]
    pub fn new(
        users: Arc<U>,
        tasks: Arc<T>,
        notifier: AssignmentNotifier<M>,
        clock: Arc<C>,
        policy: RegistrationPolicy,
    ) -> Self {
        Self {
            credentials: CredentialService::new(Arc::clone(&users), clock, policy),
            authenticator: Authenticator::new(Arc::clone(&users)),
            tasks: TaskAssignmentService::new(tasks, users, notifier),
        }
    }

    /// Checks credentials and returns the user's identity.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when a field is missing,
    /// [`ApiError::InvalidCredentials`] when the pair does not match, or
    /// [`ApiError::Persistence`] on backend failure.
    pub async fn login(&self, body: LoginBody) -> ApiResult<LoginResponse> {
        let email = body.email.unwrap_or_default();
        let password = body.password.unwrap_or_default();
        let identity = self
            .authenticator
            .login(&email, &password)
            .await
            .map_err(|err| ApiError::from_authentication(&err))?;
        Ok(LoginResponse {
            id: identity.id,
            role: identity.role,
            message: "Login successful".to_owned(),
        })
    }

    /// Lists every user without password digests, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on backend failure.
    pub async fn list_users(&self) -> ApiResult<Vec<UserSummary>> {
        self.credentials
            .list_all()
            .await
            .map_err(|err| ApiError::from_credentials(&err, &Messages::LIST_USERS))
    }

    /// Registers a user, elevating to admin on a matching code.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when a field is missing,
    /// [`ApiError::DuplicateIdentity`] when the email is taken, or
    /// [`ApiError::Persistence`] on backend failure.
    pub async fn create_user(&self, body: CreateUserBody) -> ApiResult<CreateUserResponse> {
        let messages = Messages::CREATE_USER;
        let (Some(first_name), Some(last_name), Some(email), Some(password)) = (
            present(body.first_name),
            present(body.last_name),
            present(body.email),
            present(body.password),
        ) else {
            return Err(ApiError::Validation(messages.invalid.to_owned()));
        };

        let mut request = RegisterUserRequest::new(first_name, last_name, email, password);
        if let Some(code) = present(body.admin_code) {
            request = request.with_admin_code(code);
        }

        let user = self
            .credentials
            .register(request)
            .await
            .map_err(|err| ApiError::from_credentials(&err, &messages))?;
        Ok(CreateUserResponse {
            id: user.id(),
            role: user.role(),
            message: format!("User created successfully as {}", user.role()),
        })
    }

    /// Replaces a user's name, email, and role.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for missing fields or an unknown
    /// role, [`ApiError::NotFound`] when the user does not exist,
    /// [`ApiError::DuplicateIdentity`] when the email belongs to someone
    /// else, or [`ApiError::Persistence`] on backend failure.
    pub async fn update_user(
        &self,
        id: UserId,
        body: UpdateUserBody,
    ) -> ApiResult<MessageResponse> {
        let messages = Messages::UPDATE_USER;
        let (Some(first_name), Some(last_name), Some(email), Some(role)) = (
            present(body.first_name),
            present(body.last_name),
            present(body.email),
            present(body.role),
        ) else {
            return Err(ApiError::Validation(messages.invalid.to_owned()));
        };

        self.credentials
            .update(UpdateUserRequest::new(id, first_name, last_name, email, role))
            .await
            .map_err(|err| ApiError::from_credentials(&err, &messages))?;
        Ok(MessageResponse::new("User updated successfully."))
    }

    /// Deletes a user. Their tasks are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the user does not exist, or
    /// [`ApiError::Persistence`] on backend failure.
    pub async fn delete_user(&self, id: UserId) -> ApiResult<MessageResponse> {
        self.credentials
            .remove(id)
            .await
            .map_err(|err| ApiError::from_credentials(&err, &Messages::DELETE_USER))?;
        Ok(MessageResponse::new("User deleted successfully."))
    }

    /// Lists every task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on backend failure.
    pub async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        self.tasks
            .list_all()
            .await
            .map_err(|err| ApiError::from_tasks(&err, &Messages::LIST_TASKS))
    }

    /// Lists the tasks assigned to `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on backend failure.
    pub async fn tasks_for_user(&self, user_id: UserId) -> ApiResult<Vec<Task>> {
        self.tasks
            .tasks_for_user(user_id)
            .await
            .map_err(|err| ApiError::from_tasks(&err, &Messages::USER_TASKS))
    }

    /// Assigns a new `Pending` task and notifies its owner.
    ///
    /// Notification failures never surface here.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the owner or text is missing, or
    /// [`ApiError::Persistence`] when the task cannot be stored.
    pub async fn create_task(&self, body: CreateTaskBody) -> ApiResult<Task> {
        let messages = Messages::CREATE_TASK;
        let (Some(owner_id), Some(text)) = (body.owner_id, present(body.text)) else {
            return Err(ApiError::Validation(messages.invalid.to_owned()));
        };

        self.tasks
            .create_task(CreateTaskRequest::new(owner_id, text, body.deadline))
            .await
            .map_err(|err| ApiError::from_tasks(&err, &messages))
    }

    /// Overwrites a task's status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the status is missing,
    /// [`ApiError::NotFound`] when the task does not exist, or
    /// [`ApiError::Persistence`] on backend failure.
    pub async fn update_task_status(
        &self,
        id: TaskId,
        body: UpdateTaskStatusBody,
    ) -> ApiResult<MessageResponse> {
        let messages = Messages::UPDATE_TASK_STATUS;
        let Some(status) = present(body.status) else {
            return Err(ApiError::Validation(messages.invalid.to_owned()));
        };

        self.tasks
            .update_status(UpdateTaskStatusRequest::new(id, status))
            .await
            .map_err(|err| ApiError::from_tasks(&err, &messages))?;
        Ok(MessageResponse::new("Task status updated successfully"))
    }
}
