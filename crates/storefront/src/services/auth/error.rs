//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
///
/// All variants are reported to the caller; none of them are fatal.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] floralink_core::EmailError),

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// An account with this email already exists.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Invalid credentials (wrong password or unknown email).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}

impl AuthError {
    /// Message suitable for showing on a login or signup form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidEmail(_) => "Please enter a valid email address".to_owned(),
            Self::WeakPassword(msg) => msg.clone(),
            Self::UserAlreadyExists => {
                "This email is already registered. Please log in instead.".to_owned()
            }
            Self::InvalidCredentials => "Invalid email or password. Please try again.".to_owned(),
            Self::PasswordHash => "Something went wrong. Please try again.".to_owned(),
        }
    }
}
