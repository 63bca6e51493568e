//! ClinSight Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! An empty config just works - only specify what you need to change.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use clinsight_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[api]\nbase_url = \"https://x/api\"").unwrap();
//! ```
//!
//! # Example Full Config
//!
//! ```toml
//! [api]
//! base_url = "https://clinsight.example.org/api"
//! timeout_secs = 30
//!
//! [session]
//! ttl_minutes = 15
//!
//! [log]
//! level = "info"
//! format = "console"
//! ```

mod api;
mod error;
mod logging;
mod session;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use session::SessionConfig;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend endpoint settings
    pub api: ApiConfig,

    /// Session lifetime and credential persistence
    pub session: SessionConfig,

    /// Logging behavior
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::io(path.display().to_string(), e))?;
        raw.parse()
    }

    /// Check cross-field invariants
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::invalid("api.base_url", "must not be empty"));
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(ConfigError::invalid(
                "api.base_url",
                format!("'{}' is not an http(s) URL", self.api.base_url),
            ));
        }
        if self.session.ttl_minutes <= 0 {
            return Err(ConfigError::invalid(
                "session.ttl_minutes",
                "must be positive",
            ));
        }
        Ok(())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
