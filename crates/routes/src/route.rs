//! The client-side route surface
//!
//! Typed counterpart of the path strings the router matches. Parsing is
//! total over the known surface; anything else is `None` and the caller
//! redirects to home.

use std::fmt;

/// A screen the router can land on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/login` - credential entry (public)
    Login,
    /// `/signup` - patient self-registration (public)
    Signup,
    /// `/` - home dashboard
    Home,
    /// `/register` - patient registration form
    Register,
    /// `/upload` - bulk document upload
    Upload,
    /// `/worklist` - patient worklist
    Worklist,
    /// `/patient/:id` - patient overview
    Patient(String),
    /// `/patient/:id/imaging` - imaging review
    PatientImaging(String),
    /// `/patient/:id/labs` - labs and vitals
    PatientLabs(String),
    /// `/patient/:id/notes` - clinical notes
    PatientNotes(String),
    /// `/patient/:id/support` - diagnostic support
    PatientSupport(String),
    /// `/audit` - audit and activity log
    Audit,
    /// `/profile` - own profile
    Profile,
}

impl Route {
    /// Parse a path into a route
    ///
    /// Returns `None` for unmatched paths; the router redirects those to
    /// `/`. Trailing slashes and repeated separators are tolerated.
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Self::Home),
            ["login"] => Some(Self::Login),
            ["signup"] => Some(Self::Signup),
            ["register"] => Some(Self::Register),
            ["upload"] => Some(Self::Upload),
            ["worklist"] => Some(Self::Worklist),
            ["audit"] => Some(Self::Audit),
            ["profile"] => Some(Self::Profile),
            ["patient", id] => Some(Self::Patient(id.to_string())),
            ["patient", id, "imaging"] => Some(Self::PatientImaging(id.to_string())),
            ["patient", id, "labs"] => Some(Self::PatientLabs(id.to_string())),
            ["patient", id, "notes"] => Some(Self::PatientNotes(id.to_string())),
            ["patient", id, "support"] => Some(Self::PatientSupport(id.to_string())),
            _ => None,
        }
    }

    /// Render back to the path string
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::Home => "/".to_string(),
            Self::Register => "/register".to_string(),
            Self::Upload => "/upload".to_string(),
            Self::Worklist => "/worklist".to_string(),
            Self::Patient(id) => format!("/patient/{id}"),
            Self::PatientImaging(id) => format!("/patient/{id}/imaging"),
            Self::PatientLabs(id) => format!("/patient/{id}/labs"),
            Self::PatientNotes(id) => format!("/patient/{id}/notes"),
            Self::PatientSupport(id) => format!("/patient/{id}/support"),
            Self::Audit => "/audit".to_string(),
            Self::Profile => "/profile".to_string(),
        }
    }

    /// Reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }

    /// The patient record this route is scoped to, if any
    pub fn patient_id(&self) -> Option<&str> {
        match self {
            Self::Patient(id)
            | Self::PatientImaging(id)
            | Self::PatientLabs(id)
            | Self::PatientNotes(id)
            | Self::PatientSupport(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
