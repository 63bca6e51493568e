//! ClinSight - Session Store
//!
//! The single source of truth for the authenticated session: who is
//! logged in, with what role, and for how long. Everything that can
//! change that answer - login, logout, patient registration, password
//! change - is an operation on [`SessionStore`]; view code never writes
//! session state directly.
//!
//! # Lifecycle
//!
//! A session is created by `login` or `register_patient`, carries a
//! client-side lifetime (15 minutes by default), and is destroyed by
//! `logout`. Expiry is enforced when the session is read: an expired
//! session reads as absent and is cleared, so the route guard redirects
//! to login on the next navigation without any background timer.
//!
//! The credential itself is owned by the gateway; the store asks the
//! gateway to persist it on login and drop it on logout, and the two
//! can never disagree about whether a user is logged in.

mod session;
mod store;

pub use session::ActiveSession;
pub use store::{SessionStore, DEFAULT_TTL_MINUTES};
