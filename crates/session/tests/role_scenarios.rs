//! End-to-end role scenarios: session store + route guard together
//!
//! Tests: physician navigation (audit denied, diagnostic support
//! granted), patient self-registration landing in a self-scoped
//! session, guard reaction to logout.

mod support;

use std::sync::Arc;

use clinsight_auth::{RegistrationInput, Role};
use clinsight_gateway::Gateway;
use clinsight_routes::{evaluate, menu_for, Access, Route};
use clinsight_session::SessionStore;

use support::spawn_backend;

fn guard(store: &SessionStore, path: &str) -> Access {
    // Unmatched paths redirect to home before the guard runs; every
    // path used here is part of the route surface.
    let route = Route::parse(path).expect("route in surface");
    evaluate(store.identity().as_ref(), &route)
}

#[tokio::test]
async fn test_physician_reaches_support_but_not_audit() {
    let base = spawn_backend().await;
    let store = SessionStore::new(Arc::new(Gateway::new(&base)));

    let identity = store.login("physician", "demo").await.unwrap();
    assert_eq!(identity.role, Role::Physician);
    assert_eq!(identity.full_name, "Sarah Williams");

    assert_eq!(guard(&store, "/audit"), Access::Denied);
    assert_eq!(guard(&store, "/patient/4/support"), Access::Granted);
    assert_eq!(guard(&store, "/worklist"), Access::Granted);
    assert_eq!(guard(&store, "/register"), Access::Denied);
}

#[tokio::test]
async fn test_registered_patient_is_scoped_to_own_record() {
    let base = spawn_backend().await;
    let store = SessionStore::new(Arc::new(Gateway::new(&base)));

    let identity = store
        .register_patient(RegistrationInput {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            username: "jane".to_string(),
            password: "abcd".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(identity.role, Role::Patient);

    let own = identity.id.as_str();
    assert_eq!(guard(&store, &format!("/patient/{own}")), Access::Granted);
    assert_eq!(guard(&store, &format!("/patient/{own}/labs")), Access::Granted);
    assert_eq!(guard(&store, "/patient/2"), Access::Denied);
    assert_eq!(guard(&store, "/worklist"), Access::Denied);

    // The menu advertises exactly what the guard would grant.
    let menu = menu_for(&identity);
    assert!(menu
        .iter()
        .any(|item| item.route == Route::Patient(own.to_string())));
    for item in &menu {
        assert_eq!(evaluate(Some(&identity), &item.route), Access::Granted);
    }
}

#[tokio::test]
async fn test_guard_redirects_after_logout() {
    let base = spawn_backend().await;
    let store = SessionStore::new(Arc::new(Gateway::new(&base)));

    store.login("admin", "demo").await.unwrap();
    assert_eq!(guard(&store, "/audit"), Access::Granted);

    store.logout();
    // Re-evaluated on every navigation: the cleared session is seen
    // immediately, whatever the prior role could reach.
    assert_eq!(guard(&store, "/audit"), Access::RedirectToLogin);
    assert_eq!(guard(&store, "/"), Access::RedirectToLogin);
    assert_eq!(guard(&store, "/login"), Access::Granted);
}

#[tokio::test]
async fn test_compliance_and_admin_reach_audit() {
    let base = spawn_backend().await;
    for username in ["admin", "compliance"] {
        let store = SessionStore::new(Arc::new(Gateway::new(&base)));
        store.login(username, "demo").await.unwrap();
        assert_eq!(guard(&store, "/audit"), Access::Granted);
        assert_eq!(guard(&store, "/patient/1"), Access::Denied);
    }
}

#[tokio::test]
async fn test_audit_fetch_through_gateway() {
    let base = spawn_backend().await;
    let gateway = Arc::new(Gateway::new(&base));
    let store = SessionStore::new(Arc::clone(&gateway));

    store.login("compliance", "demo").await.unwrap();
    let entries = gateway.audit_logs(&Default::default()).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].patient_id.as_deref(), Some("2"));
}
