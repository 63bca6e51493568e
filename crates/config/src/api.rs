//! Backend API configuration

use serde::Deserialize;

/// Default backend API prefix
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Backend endpoint settings
///
/// # Example
///
/// ```toml
/// [api]
/// base_url = "https://clinsight.example.org/api"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API base URL, including the `/api` prefix
    /// Default: `http://127.0.0.1:8000/api`
    pub base_url: String,

    /// Per-request timeout in seconds; 0 disables the timeout
    /// Default: 30
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Timeout as a duration, `None` when disabled
    pub fn timeout(&self) -> Option<std::time::Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(std::time::Duration::from_secs(self.timeout_secs))
        }
    }
}
