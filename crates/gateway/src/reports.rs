//! Diagnostic support, audit log, and system endpoints

use std::collections::HashMap;

use crate::client::Gateway;
use crate::error::Result;
use crate::types::{AuditEntry, AuditQuery, DiagnosticReport, DiagnosticRequest, HealthStatus, Page};

impl Gateway {
    // ========================================================================
    // Diagnostic support
    // ========================================================================

    /// `POST /diagnostic/generate` - generate a diagnostic report
    pub async fn generate_diagnostic_report(
        &self,
        req: &DiagnosticRequest,
    ) -> Result<DiagnosticReport> {
        self.post("/diagnostic/generate", req).await
    }

    /// `GET /diagnostic/reports/:patient_id` - reports for a patient
    pub async fn diagnostic_reports(&self, patient_id: &str) -> Result<Vec<DiagnosticReport>> {
        let page: Page<DiagnosticReport> = self
            .get(&format!("/diagnostic/reports/{patient_id}"))
            .await?;
        Ok(page.into_vec())
    }

    /// `GET /diagnostic/reports/detail/:id` - one report
    pub async fn diagnostic_report(&self, id: &str) -> Result<DiagnosticReport> {
        self.get(&format!("/diagnostic/reports/detail/{id}")).await
    }

    // ========================================================================
    // Audit log
    // ========================================================================

    /// `GET /audit` - audit entries matching the filters
    pub async fn audit_logs(&self, filter: &AuditQuery) -> Result<Vec<AuditEntry>> {
        let mut query = Vec::new();
        if let Some(start) = &filter.start_date {
            query.push(("start_date", start.clone()));
        }
        if let Some(end) = &filter.end_date {
            query.push(("end_date", end.clone()));
        }
        if let Some(user) = &filter.user {
            query.push(("user", user.clone()));
        }
        let page: Page<AuditEntry> = self.get_query("/audit", &query).await?;
        Ok(page.into_vec())
    }

    /// `GET /audit/patient/:id` - entries touching one patient record
    pub async fn patient_audit_logs(&self, patient_id: &str) -> Result<Vec<AuditEntry>> {
        let page: Page<AuditEntry> = self.get(&format!("/audit/patient/{patient_id}")).await?;
        Ok(page.into_vec())
    }

    /// `GET /audit/user/:id` - entries attributed to one user
    pub async fn user_audit_logs(&self, user_id: &str) -> Result<Vec<AuditEntry>> {
        let page: Page<AuditEntry> = self.get(&format!("/audit/user/{user_id}")).await?;
        Ok(page.into_vec())
    }

    /// `GET /audit/actions/summary` - per-action entry counts
    pub async fn audit_actions_summary(&self) -> Result<HashMap<String, u64>> {
        self.get("/audit/actions/summary").await
    }

    // ========================================================================
    // System
    // ========================================================================

    /// `GET /health` - backend liveness probe
    ///
    /// Served next to the API prefix, not under it.
    pub async fn health(&self) -> Result<HealthStatus> {
        self.get_root("/health").await
    }
}
