//! Session configuration

use std::path::PathBuf;

use serde::Deserialize;

/// Session lifetime and credential persistence
///
/// # Example
///
/// ```toml
/// [session]
/// ttl_minutes = 15
/// token_cache = "/var/lib/clinsight/access_token"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Client-side session lifetime in minutes
    /// Default: 15
    pub ttl_minutes: i64,

    /// Where the bearer token is persisted across restarts.
    /// Default: `<user data dir>/clinsight/access_token`
    pub token_cache: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: 15,
            token_cache: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.ttl_minutes, 15);
        assert_eq!(config.token_cache, None);
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
ttl_minutes = 30
token_cache = "/tmp/tok"
"#;
        let config: SessionConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.ttl_minutes, 30);
        assert_eq!(config.token_cache, Some(PathBuf::from("/tmp/tok")));
    }
}
