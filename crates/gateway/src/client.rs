//! The credential gateway
//!
//! The only code in the workspace that performs authentication or
//! domain HTTP I/O, and the sole owner of the bearer token: it attaches
//! the credential to every outbound request, persists it on login, and
//! clears it on logout. All responses are translated into
//! `Result<T, GatewayError>` before anything else sees them.

use std::time::Duration;

use parking_lot::RwLock;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::detail::format_error;
use crate::error::{GatewayError, Result};
use crate::token::TokenCache;
use crate::types::{AuthSuccess, ChangePasswordRequest, LoginRequest, RegisterRequest};

/// HTTP gateway to the ClinSight backend
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
    cache: Option<TokenCache>,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url)
            .field("has_credential", &self.has_credential())
            .finish()
    }
}

impl Gateway {
    /// Create a gateway for the given API base URL
    /// (e.g. `http://127.0.0.1:8000/api`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: RwLock::new(None),
            cache: None,
        }
    }

    /// Apply a per-request timeout; `None` leaves requests unbounded
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Result<Self> {
        if let Some(timeout) = timeout {
            self.http = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| GatewayError::Init(e.to_string()))?;
        }
        Ok(self)
    }

    /// Attach a durable token cache and load any persisted credential
    pub fn with_cache(mut self, cache: TokenCache) -> Self {
        *self.token.write() = cache.load();
        self.cache = Some(cache);
        self
    }

    /// Whether a credential is currently held
    ///
    /// Presence says nothing about validity; a stale token fails on the
    /// first real request, and only the backend can tell.
    pub fn has_credential(&self) -> bool {
        self.token.read().is_some()
    }

    /// Adopt a credential: hold it in memory and persist it
    pub fn adopt_token(&self, token: &str) -> Result<()> {
        *self.token.write() = Some(token.to_string());
        if let Some(cache) = &self.cache {
            cache.store(token)?;
        }
        Ok(())
    }

    /// Drop the credential from memory and from the durable cache
    pub fn clear_token(&self) -> Result<()> {
        *self.token.write() = None;
        if let Some(cache) = &self.cache {
            cache.clear()?;
        }
        Ok(())
    }

    // ========================================================================
    // Auth endpoints
    // ========================================================================

    /// `POST /auth/login` - exchange credentials for a token + identity
    ///
    /// On success the returned token is adopted (held and persisted).
    pub async fn login(&self, req: &LoginRequest) -> Result<AuthSuccess> {
        let auth: AuthSuccess = self
            .dispatch(self.http.post(self.url("/auth/login")).json(req), false)
            .await?;
        self.adopt_token(&auth.access_token)?;
        debug!(user_id = %auth.user.id, "credential issued");
        Ok(auth)
    }

    /// `POST /auth/register` - patient self-registration
    ///
    /// Behaves like login on success: the new account's token is
    /// adopted immediately.
    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthSuccess> {
        let auth: AuthSuccess = self
            .dispatch(self.http.post(self.url("/auth/register")).json(req), false)
            .await?;
        self.adopt_token(&auth.access_token)?;
        Ok(auth)
    }

    /// `POST /auth/register/staff` - create a staff account
    ///
    /// Requires an authenticated admin session. The caller's own
    /// credential is kept; the new account's token is not adopted.
    pub async fn register_staff(&self, req: &RegisterRequest) -> Result<AuthSuccess> {
        self.dispatch(
            self.http.post(self.url("/auth/register/staff")).json(req),
            true,
        )
        .await
    }

    /// `POST /auth/bootstrap/admin` - first-run admin creation
    ///
    /// Unauthenticated; the backend rejects it once any admin exists.
    /// The fresh admin token is adopted on success.
    pub async fn bootstrap_admin(&self, req: &RegisterRequest) -> Result<AuthSuccess> {
        let auth: AuthSuccess = self
            .dispatch(
                self.http.post(self.url("/auth/bootstrap/admin")).json(req),
                false,
            )
            .await?;
        self.adopt_token(&auth.access_token)?;
        Ok(auth)
    }

    /// `POST /auth/change-password` - change the active account password
    pub async fn change_password(&self, req: &ChangePasswordRequest) -> Result<()> {
        let _: Value = self
            .dispatch(
                self.http.post(self.url("/auth/change-password")).json(req),
                true,
            )
            .await?;
        Ok(())
    }

    // ========================================================================
    // Request plumbing
    // ========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Send a request, translating the outcome into the uniform result
    ///
    /// Transport failures become [`GatewayError::Network`]; non-success
    /// statuses become [`GatewayError::Rejected`] with the message
    /// extracted from the body.
    async fn dispatch<T: DeserializeOwned>(&self, rb: RequestBuilder, attach: bool) -> Result<T> {
        let rb = if attach {
            match self.bearer() {
                Some(token) => rb.bearer_auth(token),
                None => rb,
            }
        } else {
            rb
        };

        let resp = rb.send().await.map_err(GatewayError::network)?;
        let status = resp.status();
        if !status.is_success() {
            let body: Value = resp
                .json()
                .await
                .unwrap_or_else(|_| json!({"detail": "An error occurred"}));
            return Err(GatewayError::rejected(status.as_u16(), format_error(&body)));
        }
        resp.json().await.map_err(|e| GatewayError::Decode(e.to_string()))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.dispatch(self.http.get(self.url(path)), true).await
    }

    /// GET against the server root, outside the API prefix
    pub(crate) async fn get_root<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url.trim_end_matches("/api"), path);
        self.dispatch(self.http.get(url), true).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.dispatch(self.http.get(self.url(path)).query(query), true)
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.dispatch(self.http.post(self.url(path)).json(body), true)
            .await
    }

    pub(crate) async fn post_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.dispatch(self.http.post(self.url(path)).query(query), true)
            .await
    }

    pub(crate) async fn post_with_query<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<T> {
        self.dispatch(self.http.post(self.url(path)).query(query).json(body), true)
            .await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.dispatch(self.http.put(self.url(path)).json(body), true)
            .await
    }

    /// DELETE, ignoring any response body
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let rb = match self.bearer() {
            Some(token) => self.http.delete(self.url(path)).bearer_auth(token),
            None => self.http.delete(self.url(path)),
        };
        let resp = rb.send().await.map_err(GatewayError::network)?;
        let status = resp.status();
        if !status.is_success() {
            let body: Value = resp
                .json()
                .await
                .unwrap_or_else(|_| json!({"detail": "An error occurred"}));
            return Err(GatewayError::rejected(status.as_u16(), format_error(&body)));
        }
        Ok(())
    }
}
