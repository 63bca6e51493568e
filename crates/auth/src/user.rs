//! Authenticated identity
//!
//! Identity is created from the backend's `user` object on successful
//! login or registration, immutable for the lifetime of the session,
//! and destroyed on logout.

use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// The authenticated user, as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque identifier (also the patient-record id for patient roles)
    pub id: String,

    /// Login name
    #[serde(default)]
    pub username: String,

    /// Display name
    #[serde(default)]
    pub full_name: String,

    /// Contact email
    pub email: String,

    /// Role assigned server-side at registration
    pub role: Role,
}

impl Identity {
    /// Create a new identity
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            full_name: full_name.into(),
            email: email.into(),
            role,
        }
    }

    /// Name to show in headers and menus
    ///
    /// Falls back to the username, then the email, when the backend did
    /// not supply a display name.
    pub fn display_name(&self) -> &str {
        if !self.full_name.is_empty() {
            &self.full_name
        } else if !self.username.is_empty() {
            &self.username
        } else {
            &self.email
        }
    }

    /// Whether this identity owns the given patient record
    pub fn owns_record(&self, patient_id: &str) -> bool {
        self.id == patient_id
    }
}
