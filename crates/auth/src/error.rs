//! Authentication error types
//!
//! The taxonomy callers rely on: local validation failures never reach
//! the network, remote rejections carry the backend's readable message,
//! and transport failures are a single generic variant so a connectivity
//! problem is never reported as a wrong password.

use thiserror::Error;

/// Result type for auth operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors surfaced by session operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Login rejected by the backend (wrong username or password)
    #[error("Invalid username or password.")]
    InvalidCredentials,

    /// Operation requires an active session
    #[error("Not logged in.")]
    NotLoggedIn,

    /// A required field is empty (local validation)
    #[error("Please enter your {0}.")]
    MissingField(&'static str),

    /// Password shorter than the minimum (local validation)
    #[error("Password must be at least {min} characters.")]
    PasswordTooShort {
        /// Minimum accepted length
        min: usize,
    },

    /// Current password did not match during a password change
    #[error("Current password is incorrect.")]
    IncorrectPassword,

    /// A login or registration request is already outstanding
    #[error("Another request is already in progress.")]
    OperationInFlight,

    /// The backend rejected the request; message extracted from the
    /// response body
    #[error("{0}")]
    Rejected(String),

    /// Could not reach the backend at all
    #[error("Network error. Please check your connection.")]
    Network,
}

impl AuthError {
    /// Create a PasswordTooShort error with the given minimum
    pub fn password_too_short(min: usize) -> Self {
        Self::PasswordTooShort { min }
    }

    /// Create a Rejected error
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// True for transport failures, as opposed to anything the user can
    /// fix by changing their input
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network)
    }

    /// True for failures caught before any network call
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_) | Self::PasswordTooShort { .. } | Self::NotLoggedIn
        )
    }
}
