//! Wire types for the backend API
//!
//! Explicit request/response shapes per endpoint family, validated at
//! this boundary. Screens work with these types; none of them ever
//! probes raw JSON. Optional backend fields default rather than fail,
//! but a missing required field or an unknown role string is a decode
//! error, surfaced as such.

use serde::{Deserialize, Serialize};

use clinsight_auth::{Identity, Role};

// ============================================================================
// Auth
// ============================================================================

/// Credentials for `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Login name
    pub username: String,
    /// Plain password (TLS protects it on the wire)
    pub password: String,
}

/// Body for `POST /auth/register` and its staff/bootstrap variants
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    /// Desired login name
    pub username: String,
    /// Desired password
    pub password: String,
    /// Display name
    pub full_name: String,
    /// Contact email
    pub email: String,
    /// Account role; fixed to `patient` for self-registration
    pub role: Role,
}

/// Body for `POST /auth/change-password`
#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    /// Password currently on file
    pub current_password: String,
    /// Replacement password
    pub new_password: String,
}

/// Successful auth response: token plus the authenticated identity
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSuccess {
    /// Bearer token for subsequent requests
    pub access_token: String,
    /// Token scheme, typically `bearer`
    #[serde(default)]
    pub token_type: String,
    /// The authenticated user
    pub user: Identity,
}

// ============================================================================
// Patients
// ============================================================================

/// A patient record
#[derive(Debug, Clone, Deserialize)]
pub struct Patient {
    /// Record id (some deployments send `uuid` instead)
    #[serde(alias = "uuid")]
    pub id: String,
    /// Patient name
    pub full_name: String,
    /// Medical record number (human-facing identifier)
    #[serde(default)]
    pub mrn: String,
    /// Date of birth
    #[serde(default)]
    pub date_of_birth: String,
    /// Gender, if recorded
    #[serde(default)]
    pub gender: Option<String>,
    /// Phone, if recorded
    #[serde(default)]
    pub phone: Option<String>,
    /// Street address, if recorded
    #[serde(default)]
    pub address: Option<String>,
    /// Visit type of the current encounter
    #[serde(default)]
    pub visit_type: Option<String>,
    /// Chief complaint of the current encounter
    #[serde(default)]
    pub chief_complaint: Option<String>,
    /// Record status (Active, Pending, Discharged)
    #[serde(default)]
    pub status: String,
    /// Last activity date
    #[serde(default)]
    pub last_activity: String,
}

/// Fields for creating or updating a patient record
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatientDraft {
    /// Patient name
    pub full_name: String,
    /// Medical record number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrn: Option<String>,
    /// Date of birth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Visit type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_type: Option<String>,
    /// Chief complaint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chief_complaint: Option<String>,
    /// Record status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

// ============================================================================
// Labs & vitals
// ============================================================================

/// A lab result row
#[derive(Debug, Clone, Deserialize)]
pub struct LabResult {
    /// Result id
    pub id: String,
    /// Owning patient record
    #[serde(default)]
    pub patient_id: String,
    /// Test name (e.g. "CBC", "A1C")
    pub test_name: String,
    /// Measured value, as reported
    #[serde(default)]
    pub result_value: String,
    /// Unit of the value
    #[serde(default)]
    pub unit: Option<String>,
    /// Reference range for the test
    #[serde(default)]
    pub reference_range: Option<String>,
    /// Result status (final, preliminary, abnormal flagging)
    #[serde(default)]
    pub status: Option<String>,
    /// When the test was performed
    #[serde(default)]
    pub performed_at: Option<String>,
}

/// Fields for recording a lab result
#[derive(Debug, Clone, Serialize)]
pub struct LabResultDraft {
    /// Test name
    pub test_name: String,
    /// Measured value
    pub result_value: String,
    /// Unit of the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Reference range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_range: Option<String>,
}

/// A vital-signs reading
#[derive(Debug, Clone, Deserialize)]
pub struct VitalSigns {
    /// Reading id
    pub id: String,
    /// Owning patient record
    #[serde(default)]
    pub patient_id: String,
    /// Systolic / diastolic blood pressure
    #[serde(default)]
    pub blood_pressure: Option<String>,
    /// Heart rate, beats per minute
    #[serde(default)]
    pub heart_rate: Option<f64>,
    /// Body temperature
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Respiratory rate, breaths per minute
    #[serde(default)]
    pub respiratory_rate: Option<f64>,
    /// Oxygen saturation, percent
    #[serde(default)]
    pub oxygen_saturation: Option<f64>,
    /// When the reading was taken
    #[serde(default)]
    pub recorded_at: Option<String>,
}

/// Fields for recording vitals
#[derive(Debug, Clone, Default, Serialize)]
pub struct VitalSignsDraft {
    /// Blood pressure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,
    /// Heart rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
    /// Temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Respiratory rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respiratory_rate: Option<f64>,
    /// Oxygen saturation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oxygen_saturation: Option<f64>,
}

// ============================================================================
// Clinical notes
// ============================================================================

/// A clinical note
#[derive(Debug, Clone, Deserialize)]
pub struct ClinicalNote {
    /// Note id
    pub id: String,
    /// Owning patient record
    #[serde(default)]
    pub patient_id: String,
    /// Note category (progress, discharge, consult)
    #[serde(default)]
    pub note_type: String,
    /// Note body
    #[serde(default)]
    pub content: String,
    /// Author display name
    #[serde(default)]
    pub author: Option<String>,
    /// When the note was written
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Fields for writing a note
#[derive(Debug, Clone, Serialize)]
pub struct NoteDraft {
    /// Note category
    pub note_type: String,
    /// Note body
    pub content: String,
}

// ============================================================================
// Imaging
// ============================================================================

/// An imaging study
#[derive(Debug, Clone, Deserialize)]
pub struct ImagingStudy {
    /// Study id
    pub id: String,
    /// Owning patient record
    #[serde(default)]
    pub patient_id: String,
    /// Modality (XR, CT, MR, US)
    #[serde(default)]
    pub modality: String,
    /// Body part examined
    #[serde(default)]
    pub body_part: Option<String>,
    /// Radiologist findings
    #[serde(default)]
    pub findings: Option<String>,
    /// Radiologist impression
    #[serde(default)]
    pub impression: Option<String>,
    /// Study status (ordered, pending-read, final)
    #[serde(default)]
    pub status: String,
    /// When the study was performed
    #[serde(default)]
    pub performed_at: Option<String>,
}

/// Fields for ordering an imaging study
#[derive(Debug, Clone, Serialize)]
pub struct ImagingDraft {
    /// Modality
    pub modality: String,
    /// Body part
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_part: Option<String>,
}

/// Radiologist interpretation of a study
#[derive(Debug, Clone, Serialize)]
pub struct ImagingInterpretation {
    /// Findings text
    pub findings: String,
    /// Impression text
    pub impression: String,
    /// New study status, when the read also closes the study
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

// ============================================================================
// Documents
// ============================================================================

/// Metadata for an uploaded document
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentMeta {
    /// Document id
    pub id: String,
    /// Owning patient record
    #[serde(default)]
    pub patient_id: String,
    /// Original file name
    #[serde(default)]
    pub file_name: String,
    /// Document category
    #[serde(default)]
    pub document_type: String,
    /// Free-text notes attached at upload
    #[serde(default)]
    pub notes: Option<String>,
    /// When the document was uploaded
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

// ============================================================================
// Diagnostic support
// ============================================================================

/// Request for a generated diagnostic report
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticRequest {
    /// Patient the report is about
    pub patient_id: String,
    /// Focus question for the report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Notes to take into account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_notes: Option<String>,
    /// Whether imaging should be considered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_images: Option<bool>,
}

/// A generated diagnostic report
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticReport {
    /// Report id
    pub id: String,
    /// Patient the report is about
    #[serde(default)]
    pub patient_id: String,
    /// Report body
    #[serde(default)]
    pub content: String,
    /// Generation status
    #[serde(default)]
    pub status: Option<String>,
    /// When the report was generated
    #[serde(default)]
    pub created_at: Option<String>,
}

// ============================================================================
// Audit
// ============================================================================

/// One audit-log entry
#[derive(Debug, Clone, Deserialize)]
pub struct AuditEntry {
    /// Entry id
    #[serde(default)]
    pub id: String,
    /// Action tag (e.g. `auth.login.success`, `resource.read`)
    pub action: String,
    /// Acting user, if attributable
    #[serde(default)]
    pub user: Option<String>,
    /// Patient record the action touched, if any
    #[serde(default)]
    pub patient_id: Option<String>,
    /// When it happened
    #[serde(default)]
    pub timestamp: String,
    /// Free-form context
    #[serde(default)]
    pub details: Option<String>,
}

/// Filters for the audit-log listing
#[derive(Debug, Clone, Default)]
pub struct AuditQuery {
    /// Inclusive start date
    pub start_date: Option<String>,
    /// Inclusive end date
    pub end_date: Option<String>,
    /// Restrict to one acting user
    pub user: Option<String>,
}

// ============================================================================
// System
// ============================================================================

/// Backend health probe response
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    /// Reported status, typically `ok`
    #[serde(default)]
    pub status: String,
}

/// Listing envelope: some deployments return a bare array, others wrap
/// it in `{results: [...]}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Page<T> {
    Items(Vec<T>),
    Keyed { results: Vec<T> },
}

impl<T> Page<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Self::Items(items) => items,
            Self::Keyed { results } => results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_success_decodes() {
        let json = r#"{
            "access_token": "tok-4",
            "token_type": "bearer",
            "user": {"id": "4", "username": "physician", "full_name": "Sarah Williams",
                     "email": "sarah.williams@hospital.demo", "role": "physician"}
        }"#;
        let auth: AuthSuccess = serde_json::from_str(json).unwrap();
        assert_eq!(auth.access_token, "tok-4");
        assert_eq!(auth.user.role, Role::Physician);
    }

    #[test]
    fn test_patient_uuid_alias() {
        let json = r#"{"uuid": "p-9", "full_name": "Jane Doe"}"#;
        let patient: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(patient.id, "p-9");
        assert_eq!(patient.mrn, "");
    }

    #[test]
    fn test_page_shapes() {
        let bare: Page<Patient> =
            serde_json::from_str(r#"[{"id": "1", "full_name": "Jane Doe"}]"#).unwrap();
        assert_eq!(bare.into_vec().len(), 1);

        let keyed: Page<Patient> =
            serde_json::from_str(r#"{"results": [{"id": "1", "full_name": "Jane Doe"}]}"#).unwrap();
        assert_eq!(keyed.into_vec().len(), 1);
    }

    #[test]
    fn test_draft_skips_absent_fields() {
        let draft = PatientDraft {
            full_name: "Jane Doe".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({"full_name": "Jane Doe"}));
    }

    #[test]
    fn test_register_request_serializes_role() {
        let req = RegisterRequest {
            username: "jane".to_string(),
            password: "abcd".to_string(),
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            role: Role::Patient,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["role"], "patient");
    }
}
