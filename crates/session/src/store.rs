//! The session store
//!
//! Single source of truth for "who is logged in and with what role".
//! All session mutation goes through the operations here; screens never
//! write session state directly, and the credential itself lives in the
//! gateway. One session per process; a second login replaces the first.

use std::sync::Arc;

use chrono::Duration;
use parking_lot::Mutex;
use tracing::{info, warn};

use clinsight_auth::{validate_password, AuthError, Identity, RegistrationInput, Result, Role};
use clinsight_gateway::{ChangePasswordRequest, Gateway, GatewayError, LoginRequest, RegisterRequest};

use crate::session::ActiveSession;

/// Default client-side session lifetime, in minutes
pub const DEFAULT_TTL_MINUTES: i64 = 15;

#[derive(Default)]
struct State {
    session: Option<ActiveSession>,
    in_flight: bool,
}

/// Owns the active session and every operation that can change it
pub struct SessionStore {
    gateway: Arc<Gateway>,
    ttl: Duration,
    state: Mutex<State>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.state.lock().session.is_some())
            .finish()
    }
}

impl SessionStore {
    /// Create a store over the given gateway with the default lifetime
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self::with_ttl(gateway, DEFAULT_TTL_MINUTES)
    }

    /// Create a store with an explicit session lifetime in minutes
    pub fn with_ttl(gateway: Arc<Gateway>, ttl_minutes: i64) -> Self {
        Self {
            gateway,
            ttl: Duration::minutes(ttl_minutes),
            state: Mutex::new(State::default()),
        }
    }

    /// The gateway this store authenticates through
    pub fn gateway(&self) -> &Arc<Gateway> {
        &self.gateway
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// The current identity, if a live session exists
    ///
    /// An expired session is cleared here, credential included, so the
    /// next guard evaluation sees an unauthenticated store.
    pub fn identity(&self) -> Option<Identity> {
        {
            let mut state = self.state.lock();
            match &state.session {
                Some(session) if session.is_expired() => state.session = None,
                Some(session) => return Some(session.identity.clone()),
                None => return None,
            }
        }
        if let Err(e) = self.gateway.clear_token() {
            warn!(error = %e, "failed to clear persisted credential");
        }
        info!(target: "audit", action = "auth.session.expired", "session expired");
        None
    }

    /// Whether a live session exists
    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }

    /// Whole minutes until the session expires, if one is live
    pub fn expires_in_minutes(&self) -> Option<i64> {
        self.identity()?;
        self.state
            .lock()
            .session
            .as_ref()
            .map(ActiveSession::expires_in_minutes)
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Log in with username and password
    ///
    /// On success the identity and credential are stored and the session
    /// clock starts. On failure prior session state is left untouched.
    pub async fn login(&self, username: &str, password: &str) -> Result<Identity> {
        let _guard = self.begin()?;
        let req = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        match self.gateway.login(&req).await {
            Ok(auth) => {
                let identity = auth.user.clone();
                self.install(ActiveSession::new(auth.user, auth.access_token, self.ttl));
                info!(
                    target: "audit",
                    action = "auth.login.success",
                    user_id = %identity.id,
                    role = %identity.role,
                    "user logged in"
                );
                Ok(identity)
            }
            Err(e) => {
                warn!(
                    target: "audit",
                    action = "auth.login.failure",
                    username = %req.username,
                    reason = %e,
                    "login rejected"
                );
                Err(match e {
                    GatewayError::Rejected { status: 401, .. } => AuthError::InvalidCredentials,
                    other => remote_error(other),
                })
            }
        }
    }

    /// Clear the session and drop the persisted credential
    ///
    /// Idempotent: calling it while logged out is a no-op. Session state
    /// is fully cleared before this returns, so a redirect issued
    /// afterwards can never observe a stale identity.
    pub fn logout(&self) {
        let had_session = self.state.lock().session.take().is_some();
        if let Err(e) = self.gateway.clear_token() {
            warn!(error = %e, "failed to clear persisted credential");
        }
        if had_session {
            info!(target: "audit", action = "auth.logout", "user logged out");
        }
    }

    /// Register a patient account and establish a session for it
    ///
    /// Local invariants (password length, required fields) are checked
    /// before any network call; duplicate and reserved usernames are the
    /// backend's call and surface as rejections.
    pub async fn register_patient(&self, input: RegistrationInput) -> Result<Identity> {
        let _guard = self.begin()?;
        let input = input.trimmed();
        input.validate()?;

        let req = RegisterRequest {
            username: input.username,
            password: input.password,
            full_name: input.full_name,
            email: input.email,
            role: Role::Patient,
        };
        match self.gateway.register(&req).await {
            Ok(auth) => {
                let identity = auth.user.clone();
                self.install(ActiveSession::new(auth.user, auth.access_token, self.ttl));
                info!(
                    target: "audit",
                    action = "auth.register.success",
                    user_id = %identity.id,
                    "patient account created"
                );
                Ok(identity)
            }
            Err(e) => {
                warn!(
                    target: "audit",
                    action = "auth.register.failure",
                    username = %req.username,
                    reason = %e,
                    "registration rejected"
                );
                Err(remote_error(e))
            }
        }
    }

    /// Change the active account's password
    ///
    /// Requires a live session. The new password's length is checked
    /// locally; the current password is verified by the backend. Neither
    /// identity nor session state changes, and no re-login is required.
    pub async fn change_password(&self, current: &str, new: &str) -> Result<()> {
        if self.identity().is_none() {
            return Err(AuthError::NotLoggedIn);
        }
        let _guard = self.begin()?;
        validate_password(new)?;

        let req = ChangePasswordRequest {
            current_password: current.to_string(),
            new_password: new.to_string(),
        };
        self.gateway.change_password(&req).await.map_err(|e| match e {
            GatewayError::Rejected {
                status: 400 | 401 | 403,
                ..
            } => AuthError::IncorrectPassword,
            other => remote_error(other),
        })
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn install(&self, session: ActiveSession) {
        self.state.lock().session = Some(session);
    }

    /// Claim the single submission slot; released when the guard drops
    fn begin(&self) -> Result<InFlight<'_>> {
        let mut state = self.state.lock();
        if state.in_flight {
            return Err(AuthError::OperationInFlight);
        }
        state.in_flight = true;
        Ok(InFlight { state: &self.state })
    }
}

/// Map a gateway failure into the session error taxonomy
fn remote_error(e: GatewayError) -> AuthError {
    match e {
        GatewayError::Network(_) => AuthError::Network,
        GatewayError::Rejected { message, .. } => AuthError::Rejected(message),
        other => AuthError::Rejected(other.to_string()),
    }
}

struct InFlight<'a> {
    state: &'a Mutex<State>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.lock().in_flight = false;
    }
}
