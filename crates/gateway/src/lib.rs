//! ClinSight - Credential Gateway
//!
//! The boundary between the client core and the backend REST API. This
//! crate is the only place that performs authentication or domain HTTP
//! I/O, and the sole owner of the bearer-token lifecycle: the token is
//! attached to every authenticated request, persisted to one durable
//! cache file on login, and cleared on logout.
//!
//! # Uniform results
//!
//! Every endpoint returns `Result<T, GatewayError>`. Callers never see
//! an HTTP status code:
//!
//! - A non-success response becomes [`GatewayError::Rejected`], its
//!   message extracted from the body's `detail` field - either a plain
//!   string or a list of field-level validation errors joined into one
//!   readable line.
//! - A transport failure (offline, DNS, refused, timeout) becomes
//!   [`GatewayError::Network`], which always displays the same generic
//!   connectivity message. A user is never told their password was
//!   wrong when the server was unreachable.
//!
//! # Example
//!
//! ```ignore
//! use clinsight_gateway::{Gateway, TokenCache, LoginRequest};
//!
//! let gw = Gateway::new("http://127.0.0.1:8000/api")
//!     .with_cache(TokenCache::default_location().unwrap());
//!
//! let auth = gw.login(&LoginRequest {
//!     username: "physician".into(),
//!     password: "demo".into(),
//! }).await?;
//!
//! let worklist = gw.patients().await?;
//! ```

mod client;
mod detail;
mod error;
mod records;
mod reports;
mod token;
mod types;

pub use client::Gateway;
pub use error::{GatewayError, Result};
pub use token::TokenCache;
pub use types::{
    AuditEntry, AuditQuery, AuthSuccess, ChangePasswordRequest, ClinicalNote, DiagnosticReport,
    DiagnosticRequest, DocumentMeta, HealthStatus, ImagingDraft, ImagingInterpretation,
    ImagingStudy, LabResult, LabResultDraft, LoginRequest, NoteDraft, Patient, PatientDraft,
    RegisterRequest, VitalSigns, VitalSignsDraft,
};
