//! Application services for credential management and login.

mod authenticator;
mod credentials;

pub use authenticator::{
    AuthenticatedUser, AuthenticationError, AuthenticationResult, Authenticator,
};
pub use credentials::{
    CredentialService, CredentialServiceError, CredentialServiceResult, RegisterUserRequest,
    RegistrationPolicy, UpdateUserRequest,
};
