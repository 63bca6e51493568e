//! The route guard
//!
//! Three-state outcome for every navigation: no session means redirect
//! to login, a session the policy denies means an access-denied view,
//! anything else renders. Evaluated fresh on every call; the guard must
//! react immediately to logout and to deep links.

use clinsight_auth::Identity;
use tracing::debug;

use crate::policy::allows_identity;
use crate::route::Route;

/// Outcome of a guard evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No session; send the user to `/login`
    RedirectToLogin,
    /// Session present but the policy denies this route
    Denied,
    /// Render the requested screen
    Granted,
}

impl Access {
    /// Whether the screen behind the route may render
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Evaluate the guard for a navigation
///
/// Public routes are reachable with or without a session. Everything
/// else requires an identity, then passes through the policy table and
/// the patient self-scope rule.
pub fn evaluate(user: Option<&Identity>, route: &Route) -> Access {
    if route.is_public() {
        return Access::Granted;
    }
    let Some(user) = user else {
        return Access::RedirectToLogin;
    };
    if allows_identity(user, route) {
        Access::Granted
    } else {
        debug!(role = %user.role, route = %route, "route denied by policy");
        Access::Denied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinsight_auth::Role;

    fn physician() -> Identity {
        Identity::new("4", "physician", "Sarah Williams", "sw@hospital.demo", Role::Physician)
    }

    #[test]
    fn test_unauthenticated_redirects() {
        assert_eq!(evaluate(None, &Route::Home), Access::RedirectToLogin);
        assert_eq!(evaluate(None, &Route::Worklist), Access::RedirectToLogin);
        assert_eq!(
            evaluate(None, &Route::Patient("1".into())),
            Access::RedirectToLogin
        );
    }

    #[test]
    fn test_public_routes_always_granted() {
        assert_eq!(evaluate(None, &Route::Login), Access::Granted);
        assert_eq!(evaluate(None, &Route::Signup), Access::Granted);
        // Also with a session (e.g. navigating back to /login while logged in).
        assert_eq!(evaluate(Some(&physician()), &Route::Login), Access::Granted);
    }

    #[test]
    fn test_denied_route_renders_access_denied() {
        let user = physician();
        assert_eq!(evaluate(Some(&user), &Route::Audit), Access::Denied);
        assert_eq!(evaluate(Some(&user), &Route::Register), Access::Denied);
    }

    #[test]
    fn test_granted_routes() {
        let user = physician();
        assert_eq!(evaluate(Some(&user), &Route::Home), Access::Granted);
        assert_eq!(evaluate(Some(&user), &Route::Worklist), Access::Granted);
        assert_eq!(
            evaluate(Some(&user), &Route::PatientSupport("4".into())),
            Access::Granted
        );
    }

    #[test]
    fn test_patient_deep_link_to_other_record() {
        let jane = Identity::new("100", "jane", "Jane Doe", "jane@x.com", Role::Patient);
        assert_eq!(
            evaluate(Some(&jane), &Route::Patient("100".into())),
            Access::Granted
        );
        assert_eq!(
            evaluate(Some(&jane), &Route::Patient("2".into())),
            Access::Denied
        );
    }
}
