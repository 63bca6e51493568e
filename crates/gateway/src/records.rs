//! Clinical record endpoints
//!
//! Patients, labs, vitals, notes, imaging, and documents. Every method
//! is a thin typed wrapper over the request plumbing in `client`; no
//! caller touches paths, query strings, or status codes.

use crate::client::Gateway;
use crate::error::Result;
use crate::types::{
    ClinicalNote, DocumentMeta, ImagingDraft, ImagingInterpretation, ImagingStudy, LabResult,
    LabResultDraft, NoteDraft, Page, Patient, PatientDraft, VitalSigns, VitalSignsDraft,
};

fn patient_query(patient_id: &str) -> [(&'static str, String); 1] {
    [("patient_id", patient_id.to_string())]
}

impl Gateway {
    // ========================================================================
    // Patients
    // ========================================================================

    /// `POST /patients` - register a patient record
    pub async fn create_patient(&self, draft: &PatientDraft) -> Result<Patient> {
        self.post("/patients", draft).await
    }

    /// `GET /patients` - the full worklist
    pub async fn patients(&self) -> Result<Vec<Patient>> {
        let page: Page<Patient> = self.get("/patients").await?;
        Ok(page.into_vec())
    }

    /// `GET /patients/:id`
    pub async fn patient(&self, id: &str) -> Result<Patient> {
        self.get(&format!("/patients/{id}")).await
    }

    /// `PUT /patients/:id`
    pub async fn update_patient(&self, id: &str, draft: &PatientDraft) -> Result<Patient> {
        self.put(&format!("/patients/{id}"), draft).await
    }

    /// `DELETE /patients/:id`
    pub async fn delete_patient(&self, id: &str) -> Result<()> {
        self.delete(&format!("/patients/{id}")).await
    }

    /// `GET /patients/my-record` - the caller's own record (patient role)
    pub async fn my_record(&self) -> Result<Patient> {
        self.get("/patients/my-record").await
    }

    /// `POST /patients/link-my-record` - claim a record by MRN
    pub async fn link_my_record(&self, mrn: &str) -> Result<Patient> {
        self.post_query("/patients/link-my-record", &[("mrn", mrn.to_string())])
            .await
    }

    // ========================================================================
    // Labs
    // ========================================================================

    /// `POST /labs/labs?patient_id=` - record a lab result
    pub async fn create_lab_result(
        &self,
        patient_id: &str,
        draft: &LabResultDraft,
    ) -> Result<LabResult> {
        self.post_with_query("/labs/labs", &patient_query(patient_id), draft)
            .await
    }

    /// `GET /labs/labs` - lab results, optionally filtered
    pub async fn lab_results(
        &self,
        patient_id: Option<&str>,
        test_name: Option<&str>,
    ) -> Result<Vec<LabResult>> {
        let mut query = Vec::new();
        if let Some(id) = patient_id {
            query.push(("patient_id", id.to_string()));
        }
        if let Some(name) = test_name {
            query.push(("test_name", name.to_string()));
        }
        let page: Page<LabResult> = self.get_query("/labs/labs", &query).await?;
        Ok(page.into_vec())
    }

    /// `GET /labs/labs/patient/:id` - all lab results for one patient
    pub async fn patient_lab_results(&self, patient_id: &str) -> Result<Vec<LabResult>> {
        let page: Page<LabResult> = self.get(&format!("/labs/labs/patient/{patient_id}")).await?;
        Ok(page.into_vec())
    }

    /// `GET /labs/labs/:id`
    pub async fn lab_result(&self, id: &str) -> Result<LabResult> {
        self.get(&format!("/labs/labs/{id}")).await
    }

    /// `DELETE /labs/labs/:id`
    pub async fn delete_lab_result(&self, id: &str) -> Result<()> {
        self.delete(&format!("/labs/labs/{id}")).await
    }

    // ========================================================================
    // Vitals
    // ========================================================================

    /// `POST /labs/vitals?patient_id=` - record a vitals reading
    pub async fn create_vitals(
        &self,
        patient_id: &str,
        draft: &VitalSignsDraft,
    ) -> Result<VitalSigns> {
        self.post_with_query("/labs/vitals", &patient_query(patient_id), draft)
            .await
    }

    /// `GET /labs/vitals` - vitals readings, optionally for one patient
    pub async fn vitals(&self, patient_id: Option<&str>) -> Result<Vec<VitalSigns>> {
        let query: Vec<(&str, String)> = patient_id
            .map(|id| vec![("patient_id", id.to_string())])
            .unwrap_or_default();
        let page: Page<VitalSigns> = self.get_query("/labs/vitals", &query).await?;
        Ok(page.into_vec())
    }

    /// `GET /labs/vitals/latest/:id` - most recent reading for a patient
    pub async fn latest_vitals(&self, patient_id: &str) -> Result<VitalSigns> {
        self.get(&format!("/labs/vitals/latest/{patient_id}")).await
    }

    /// `DELETE /labs/vitals/:id`
    pub async fn delete_vitals(&self, id: &str) -> Result<()> {
        self.delete(&format!("/labs/vitals/{id}")).await
    }

    // ========================================================================
    // Clinical notes
    // ========================================================================

    /// `POST /notes?patient_id=` - write a note
    pub async fn create_note(&self, patient_id: &str, draft: &NoteDraft) -> Result<ClinicalNote> {
        self.post_with_query("/notes", &patient_query(patient_id), draft)
            .await
    }

    /// `GET /notes` - notes, optionally filtered by patient and type
    pub async fn notes(
        &self,
        patient_id: Option<&str>,
        note_type: Option<&str>,
    ) -> Result<Vec<ClinicalNote>> {
        let mut query = Vec::new();
        if let Some(id) = patient_id {
            query.push(("patient_id", id.to_string()));
        }
        if let Some(kind) = note_type {
            query.push(("note_type", kind.to_string()));
        }
        let page: Page<ClinicalNote> = self.get_query("/notes", &query).await?;
        Ok(page.into_vec())
    }

    /// `GET /notes/:id`
    pub async fn note(&self, id: &str) -> Result<ClinicalNote> {
        self.get(&format!("/notes/{id}")).await
    }

    /// `PUT /notes/:id`
    pub async fn update_note(&self, id: &str, draft: &NoteDraft) -> Result<ClinicalNote> {
        self.put(&format!("/notes/{id}"), draft).await
    }

    /// `DELETE /notes/:id`
    pub async fn delete_note(&self, id: &str) -> Result<()> {
        self.delete(&format!("/notes/{id}")).await
    }

    // ========================================================================
    // Imaging
    // ========================================================================

    /// `POST /imaging?patient_id=` - order a study
    pub async fn create_imaging_study(
        &self,
        patient_id: &str,
        draft: &ImagingDraft,
    ) -> Result<ImagingStudy> {
        self.post_with_query("/imaging", &patient_query(patient_id), draft)
            .await
    }

    /// `GET /imaging` - studies, optionally filtered
    pub async fn imaging_studies(
        &self,
        patient_id: Option<&str>,
        modality: Option<&str>,
    ) -> Result<Vec<ImagingStudy>> {
        let mut query = Vec::new();
        if let Some(id) = patient_id {
            query.push(("patient_id", id.to_string()));
        }
        if let Some(m) = modality {
            query.push(("modality", m.to_string()));
        }
        let page: Page<ImagingStudy> = self.get_query("/imaging", &query).await?;
        Ok(page.into_vec())
    }

    /// `GET /imaging/:id`
    pub async fn imaging_study(&self, id: &str) -> Result<ImagingStudy> {
        self.get(&format!("/imaging/{id}")).await
    }

    /// `PUT /imaging/:id/interpret` - attach a radiologist read
    pub async fn interpret_imaging_study(
        &self,
        id: &str,
        read: &ImagingInterpretation,
    ) -> Result<ImagingStudy> {
        self.put(&format!("/imaging/{id}/interpret"), read).await
    }

    /// `DELETE /imaging/:id`
    pub async fn delete_imaging_study(&self, id: &str) -> Result<()> {
        self.delete(&format!("/imaging/{id}")).await
    }

    // ========================================================================
    // Documents
    // ========================================================================

    /// `GET /documents` - document metadata, optionally filtered
    pub async fn documents(
        &self,
        patient_id: Option<&str>,
        document_type: Option<&str>,
    ) -> Result<Vec<DocumentMeta>> {
        let mut query = Vec::new();
        if let Some(id) = patient_id {
            query.push(("patient_id", id.to_string()));
        }
        if let Some(kind) = document_type {
            query.push(("document_type", kind.to_string()));
        }
        let page: Page<DocumentMeta> = self.get_query("/documents", &query).await?;
        Ok(page.into_vec())
    }

    /// `GET /documents/:id`
    pub async fn document(&self, id: &str) -> Result<DocumentMeta> {
        self.get(&format!("/documents/{id}")).await
    }

    /// `DELETE /documents/:id`
    pub async fn delete_document(&self, id: &str) -> Result<()> {
        self.delete(&format!("/documents/{id}")).await
    }

    /// `GET /documents/my-documents` - the caller's own uploads
    pub async fn my_documents(&self, document_type: Option<&str>) -> Result<Vec<DocumentMeta>> {
        let query: Vec<(&str, String)> = document_type
            .map(|kind| vec![("document_type", kind.to_string())])
            .unwrap_or_default();
        let page: Page<DocumentMeta> = self.get_query("/documents/my-documents", &query).await?;
        Ok(page.into_vec())
    }

    // ========================================================================
    // Patient portal
    // ========================================================================

    /// `GET /labs/my-vitals` - the caller's own vitals history
    pub async fn my_vitals(&self) -> Result<Vec<VitalSigns>> {
        let page: Page<VitalSigns> = self.get("/labs/my-vitals").await?;
        Ok(page.into_vec())
    }

    /// `POST /labs/my-vitals` - self-reported vitals
    pub async fn add_my_vitals(&self, draft: &VitalSignsDraft) -> Result<VitalSigns> {
        self.post("/labs/my-vitals", draft).await
    }

    /// `GET /labs/my-labs` - the caller's own lab history
    pub async fn my_labs(&self) -> Result<Vec<LabResult>> {
        let page: Page<LabResult> = self.get("/labs/my-labs").await?;
        Ok(page.into_vec())
    }

    /// `GET /notes/my-notes` - the caller's own notes
    pub async fn my_notes(&self, note_type: Option<&str>) -> Result<Vec<ClinicalNote>> {
        let query: Vec<(&str, String)> = note_type
            .map(|kind| vec![("note_type", kind.to_string())])
            .unwrap_or_default();
        let page: Page<ClinicalNote> = self.get_query("/notes/my-notes", &query).await?;
        Ok(page.into_vec())
    }

    /// `POST /notes/my-notes` - patient-authored note
    pub async fn create_my_note(&self, draft: &NoteDraft) -> Result<ClinicalNote> {
        self.post("/notes/my-notes", draft).await
    }
}
