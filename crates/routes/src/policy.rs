//! The role→route access table
//!
//! This is the single normative definition of the access policy. The
//! route guard and the navigation-menu builder both consult it; no
//! other code may answer "can this role see X".
//!
//! A route either has no restriction (any authenticated role) or an
//! explicit allow-list; absence from the allow-list means denial. The
//! patient self-scope rule is layered on top: a `patient` role reaches
//! `/patient/:id/*` only for its own record id.

use clinsight_auth::{Identity, Role};

use crate::route::Route;

/// Staff roles that work the clinical worklist
const CLINICAL_STAFF: &[Role] = &[Role::Intake, Role::Nurse, Role::Radiologist, Role::Physician];

/// Roles that may open a patient chart (patients only their own)
const CHART_READERS: &[Role] = &[
    Role::Intake,
    Role::Nurse,
    Role::Radiologist,
    Role::Physician,
    Role::Patient,
];

/// The allow-list for a route
///
/// `None` means any authenticated role (and, for public routes, no
/// session at all - the guard short-circuits those before asking).
pub fn allowed_roles(route: &Route) -> Option<&'static [Role]> {
    match route {
        Route::Login | Route::Signup | Route::Home | Route::Profile => None,
        Route::Register | Route::Upload => Some(&[Role::Intake]),
        Route::Worklist => Some(CLINICAL_STAFF),
        Route::Patient(_)
        | Route::PatientImaging(_)
        | Route::PatientLabs(_)
        | Route::PatientNotes(_) => Some(CHART_READERS),
        Route::PatientSupport(_) => Some(&[Role::Physician]),
        Route::Audit => Some(&[Role::Admin, Role::Compliance]),
    }
}

/// Table lookup only: does the role's allow-list cover the route?
///
/// This does not apply the patient self-scope rule; use
/// [`allows_identity`] when an identity is at hand.
pub fn allows(role: Role, route: &Route) -> bool {
    match allowed_roles(route) {
        None => true,
        Some(roles) => roles.contains(&role),
    }
}

/// Full policy check for an identity, including patient self-scope
pub fn allows_identity(user: &Identity, route: &Route) -> bool {
    if !allows(user.role, route) {
        return false;
    }
    // Patients reach patient-detail routes only for their own record.
    if user.role == Role::Patient {
        if let Some(patient_id) = route.patient_id() {
            return user.owns_record(patient_id);
        }
    }
    true
}
