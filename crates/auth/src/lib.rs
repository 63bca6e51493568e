//! ClinSight - Authentication
//!
//! Identity, roles, and the error taxonomy shared by the session store
//! and the route policy.
//!
//! # Overview
//!
//! Simple RBAC with a closed set of 7 clinical roles:
//!
//! | Role | Reach |
//! |------|-------|
//! | `Intake` | Registration, bulk upload, worklist, patient charts |
//! | `Nurse` | Worklist, patient charts |
//! | `Radiologist` | Worklist, patient charts |
//! | `Physician` | Worklist, patient charts, diagnostic support |
//! | `Admin` | Audit log, staff management |
//! | `Compliance` | Audit log |
//! | `Patient` | Own record only |
//!
//! A role is assigned server-side at registration and never changes on
//! the client. Which routes a role may reach is defined once, in the
//! `clinsight-routes` policy table; this crate only defines the tags.
//!
//! # Errors
//!
//! [`AuthError`] separates the three failure kinds callers must be able
//! to tell apart: local validation (bad input, caught before any network
//! call), remote domain rejection (the backend said no, with a readable
//! message), and transport failure (could not reach the backend at all).

mod error;
mod roles;
mod user;
pub mod validate;

pub use error::{AuthError, Result};
pub use roles::{Role, ALL_ROLES};
pub use user::Identity;
pub use validate::{validate_password, RegistrationInput, MIN_PASSWORD_LEN};
