//! Durable bearer-token cache
//!
//! Exactly one token survives a restart: the cache is a single file
//! holding the current credential and nothing else. Written on login,
//! removed on logout. A missing or unreadable cache simply means the
//! user is not logged in; only write failures are surfaced.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{GatewayError, Result};

/// File name under the application data directory
const TOKEN_FILE: &str = "access_token";

/// File-backed store for the current bearer token
#[derive(Debug, Clone)]
pub struct TokenCache {
    path: PathBuf,
}

impl TokenCache {
    /// Cache at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Cache at the default location under the user data directory
    ///
    /// Returns `None` when the platform reports no data directory.
    pub fn default_location() -> Option<Self> {
        let dir = dirs::data_dir()?;
        Some(Self::at(dir.join("clinsight").join(TOKEN_FILE)))
    }

    /// Path of the cache file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted token, if any
    ///
    /// Read failures other than "not found" are logged and treated as
    /// absent; a corrupt cache must never block a fresh login.
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                if token.is_empty() {
                    None
                } else {
                    Some(token)
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read token cache");
                None
            }
        }
    }

    /// Persist the token, creating parent directories as needed
    pub fn store(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| GatewayError::TokenCache {
                action: "write",
                path: self.path.display().to_string(),
                source,
            })?;
        }
        fs::write(&self.path, token).map_err(|source| GatewayError::TokenCache {
            action: "write",
            path: self.path.display().to_string(),
            source,
        })
    }

    /// Remove the persisted token; a missing file is already cleared
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(GatewayError::TokenCache {
                action: "clear",
                path: self.path.display().to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_in_tempdir() -> (tempfile::TempDir, TokenCache) {
        let dir = tempfile::tempdir().unwrap();
        let cache = TokenCache::at(dir.path().join("clinsight").join(TOKEN_FILE));
        (dir, cache)
    }

    #[test]
    fn test_load_missing() {
        let (_dir, cache) = cache_in_tempdir();
        assert_eq!(cache.load(), None);
    }

    #[test]
    fn test_store_and_load() {
        let (_dir, cache) = cache_in_tempdir();
        cache.store("tok-abc123").unwrap();
        assert_eq!(cache.load(), Some("tok-abc123".to_string()));
    }

    #[test]
    fn test_store_overwrites() {
        let (_dir, cache) = cache_in_tempdir();
        cache.store("first").unwrap();
        cache.store("second").unwrap();
        assert_eq!(cache.load(), Some("second".to_string()));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (_dir, cache) = cache_in_tempdir();
        cache.store("tok").unwrap();
        cache.clear().unwrap();
        assert_eq!(cache.load(), None);
        // Second clear: nothing to remove, still Ok.
        cache.clear().unwrap();
    }

    #[test]
    fn test_load_trims_whitespace() {
        let (_dir, cache) = cache_in_tempdir();
        cache.store("tok-xyz\n").unwrap();
        assert_eq!(cache.load(), Some("tok-xyz".to_string()));
    }

    #[test]
    fn test_empty_file_is_absent() {
        let (_dir, cache) = cache_in_tempdir();
        cache.store("").unwrap();
        assert_eq!(cache.load(), None);
    }
}
