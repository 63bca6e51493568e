//! Navigation menu builder
//!
//! Builds the sidebar entries for an identity from the same policy table
//! the guard enforces, so a user is never shown a link the guard would
//! deny. Parameterized chart routes are not sidebar material; the one
//! exception is the patient's own "My record" entry, inserted right
//! after the dashboard.

use clinsight_auth::{Identity, Role};

use crate::policy::allows_identity;
use crate::route::Route;

/// A sidebar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Label shown to the user
    pub label: &'static str,
    /// Destination
    pub route: Route,
}

impl NavItem {
    fn new(label: &'static str, route: Route) -> Self {
        Self { label, route }
    }
}

/// Sidebar entries visible to the given identity, in display order
pub fn menu_for(user: &Identity) -> Vec<NavItem> {
    let candidates = [
        NavItem::new("Dashboard", Route::Home),
        NavItem::new("Patient Registration", Route::Register),
        NavItem::new("Bulk Upload", Route::Upload),
        NavItem::new("Patient Worklist", Route::Worklist),
        NavItem::new("Audit & Activity Log", Route::Audit),
        NavItem::new("Profile", Route::Profile),
    ];

    let mut items: Vec<NavItem> = candidates
        .into_iter()
        .filter(|item| allows_identity(user, &item.route))
        .collect();

    if user.role == Role::Patient {
        items.insert(1, NavItem::new("My record", Route::Patient(user.id.clone())));
    }

    items
}
