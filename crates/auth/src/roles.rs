//! Clinical roles for access control
//!
//! A closed, flat enumeration: unlike a ranked admin hierarchy, clinical
//! roles are not ordered (a physician is not "more" than a compliance
//! officer, they reach different screens). Membership in a route's
//! allow-list is the only access semantics; see `clinsight-routes`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role tag carried by every authenticated identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Front-desk intake: registers patients, uploads documents
    Intake,
    /// Nursing staff: worklist and patient charts
    Nurse,
    /// Radiology staff: worklist and patient charts
    Radiologist,
    /// Attending physician: charts plus diagnostic support
    Physician,
    /// System administration: audit log, staff accounts
    Admin,
    /// Compliance officer: audit log
    Compliance,
    /// A patient, restricted to their own record
    Patient,
}

/// All roles, in display order
pub const ALL_ROLES: [Role; 7] = [
    Role::Intake,
    Role::Nurse,
    Role::Radiologist,
    Role::Physician,
    Role::Admin,
    Role::Compliance,
    Role::Patient,
];

impl Role {
    /// Parse role from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "intake" => Some(Self::Intake),
            "nurse" => Some(Self::Nurse),
            "radiologist" => Some(Self::Radiologist),
            "physician" => Some(Self::Physician),
            "admin" => Some(Self::Admin),
            "compliance" => Some(Self::Compliance),
            "patient" => Some(Self::Patient),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intake => "intake",
            Self::Nurse => "nurse",
            Self::Radiologist => "radiologist",
            Self::Physician => "physician",
            Self::Admin => "admin",
            Self::Compliance => "compliance",
            Self::Patient => "patient",
        }
    }

    /// Hospital staff (everything except self-registered patients)
    pub fn is_staff(&self) -> bool {
        !matches!(self, Self::Patient)
    }

    /// Staff roles that work the clinical worklist
    pub fn is_clinical(&self) -> bool {
        matches!(
            self,
            Self::Intake | Self::Nurse | Self::Radiologist | Self::Physician
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!(Role::parse("intake"), Some(Role::Intake));
        assert_eq!(Role::parse("nurse"), Some(Role::Nurse));
        assert_eq!(Role::parse("radiologist"), Some(Role::Radiologist));
        assert_eq!(Role::parse("physician"), Some(Role::Physician));
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("compliance"), Some(Role::Compliance));
        assert_eq!(Role::parse("patient"), Some(Role::Patient));
        assert_eq!(Role::parse("PHYSICIAN"), Some(Role::Physician));
        assert_eq!(Role::parse("janitor"), None);
    }

    #[test]
    fn test_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_staff_split() {
        assert!(Role::Intake.is_staff());
        assert!(Role::Admin.is_staff());
        assert!(Role::Compliance.is_staff());
        assert!(!Role::Patient.is_staff());
    }

    #[test]
    fn test_clinical_split() {
        assert!(Role::Intake.is_clinical());
        assert!(Role::Nurse.is_clinical());
        assert!(Role::Radiologist.is_clinical());
        assert!(Role::Physician.is_clinical());
        assert!(!Role::Admin.is_clinical());
        assert!(!Role::Compliance.is_clinical());
        assert!(!Role::Patient.is_clinical());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Role::Radiologist).unwrap();
        assert_eq!(json, "\"radiologist\"");
        let back: Role = serde_json::from_str("\"compliance\"").unwrap();
        assert_eq!(back, Role::Compliance);
        // Unknown role strings are a hard error at the wire boundary,
        // never a silent default.
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
    }
}
