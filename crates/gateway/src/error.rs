//! Gateway error types
//!
//! Every endpoint resolves to `Result<T, GatewayError>`; callers never
//! branch on HTTP status codes directly. Transport failures display as
//! one fixed connectivity message so a user is never told their input
//! was wrong when the backend was simply unreachable.

use thiserror::Error;

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors that can occur when talking to the backend
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure: offline, DNS, refused connection,
    /// timeout. The payload is the underlying description, kept for
    /// logs only; the display string is the fixed user-facing message.
    #[error("Network error. Please check your connection.")]
    Network(String),

    /// The backend answered with a non-success status; message extracted
    /// from the response body's `detail`
    #[error("{message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Human-readable message from the response body
        message: String,
    },

    /// The response body did not match the expected shape
    #[error("unexpected response from server: {0}")]
    Decode(String),

    /// The HTTP client itself could not be constructed
    #[error("failed to initialize HTTP client: {0}")]
    Init(String),

    /// The durable token cache could not be read or written
    #[error("failed to {action} token cache at {path}: {source}")]
    TokenCache {
        /// What was attempted (read, write, clear)
        action: &'static str,
        /// Cache file path
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl GatewayError {
    /// Wrap a transport failure, preserving the cause for logs
    pub fn network(err: reqwest::Error) -> Self {
        tracing::debug!(cause = %err, "transport failure");
        Self::Network(err.to_string())
    }

    /// Create a Rejected error
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// True for transport failures
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Status code of a backend rejection, if that is what this is
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_display_is_generic() {
        let err = GatewayError::Network("tcp connect error: refused".to_string());
        assert_eq!(err.to_string(), "Network error. Please check your connection.");
        assert!(err.is_network());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_rejected_display_is_message() {
        let err = GatewayError::rejected(409, "Username already taken. Please choose another.");
        assert_eq!(err.to_string(), "Username already taken. Please choose another.");
        assert_eq!(err.status(), Some(409));
        assert!(!err.is_network());
    }
}
