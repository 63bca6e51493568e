//! The active session
//!
//! Pairing of identity and credential, stamped with a lifetime at
//! login. Expiry is enforced when the session is read, not by a
//! background timer: the store treats an expired session as absent, so
//! the next guard evaluation redirects to login.

use chrono::{DateTime, Duration, Utc};
use clinsight_auth::Identity;

/// An authenticated session
#[derive(Debug, Clone)]
pub struct ActiveSession {
    /// Who is logged in
    pub identity: Identity,
    /// The bearer token backing this session
    pub credential: String,
    /// When the session was established
    pub issued_at: DateTime<Utc>,
    /// When the session stops being honored client-side
    pub expires_at: DateTime<Utc>,
}

impl ActiveSession {
    /// Establish a session valid for `ttl` from now
    pub fn new(identity: Identity, credential: String, ttl: Duration) -> Self {
        let issued_at = Utc::now();
        Self {
            identity,
            credential,
            issued_at,
            expires_at: issued_at + ttl,
        }
    }

    /// Whether the client-side lifetime has elapsed
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Whole minutes until expiry, floored at zero
    pub fn expires_in_minutes(&self) -> i64 {
        (self.expires_at - Utc::now()).num_minutes().max(0)
    }
}
