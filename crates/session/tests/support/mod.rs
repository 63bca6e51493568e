//! In-process fixture backend for session integration tests
//!
//! Serves the auth endpoints the gateway consumes, seeded with the demo
//! dataset: staff accounts `intake`..`compliance` (ids 1-6, password
//! `demo`) and patient accounts assigned ids from 100. Duplicate and
//! reserved usernames are rejected the way the real backend does,
//! case-insensitively.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

#[derive(Clone)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub password: String,
    pub staff: bool,
}

pub struct Fixture {
    users: Mutex<HashMap<String, Account>>,
    next_patient_id: Mutex<u64>,
}

impl Default for Fixture {
    fn default() -> Self {
        let staff = [
            ("1", "intake", "Jane Smith", "jane.smith@hospital.demo"),
            ("2", "nurse", "Maria Lopez", "maria.lopez@hospital.demo"),
            ("3", "radiologist", "David Chen", "david.chen@hospital.demo"),
            ("4", "physician", "Sarah Williams", "sarah.williams@hospital.demo"),
            ("5", "admin", "Admin User", "admin@hospital.demo"),
            ("6", "compliance", "Audit User", "compliance@hospital.demo"),
        ];
        let mut users = HashMap::new();
        for (id, username, full_name, email) in staff {
            users.insert(
                username.to_string(),
                Account {
                    id: id.to_string(),
                    username: username.to_string(),
                    full_name: full_name.to_string(),
                    email: email.to_string(),
                    role: username.to_string(),
                    password: "demo".to_string(),
                    staff: true,
                },
            );
        }
        Self {
            users: Mutex::new(users),
            next_patient_id: Mutex::new(100),
        }
    }
}

fn auth_json(acct: &Account) -> Value {
    json!({
        "access_token": format!("tok-{}", acct.id),
        "token_type": "bearer",
        "user": {
            "id": acct.id,
            "username": acct.username,
            "full_name": acct.full_name,
            "email": acct.email,
            "role": acct.role,
        }
    })
}

fn detail(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "detail": message })))
}

async fn login(
    State(fx): State<Arc<Fixture>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let username = body["username"].as_str().unwrap_or("").to_lowercase();
    let password = body["password"].as_str().unwrap_or("");
    let users = fx.users.lock().unwrap();
    match users.get(&username) {
        Some(acct) if acct.password == password => (StatusCode::OK, Json(auth_json(acct))),
        _ => detail(StatusCode::UNAUTHORIZED, "Incorrect username or password."),
    }
}

async fn register(
    State(fx): State<Arc<Fixture>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let username = body["username"].as_str().unwrap_or("").to_lowercase();
    let mut users = fx.users.lock().unwrap();
    if let Some(existing) = users.get(&username) {
        return if existing.staff {
            detail(StatusCode::CONFLICT, "This username is reserved.")
        } else {
            detail(
                StatusCode::CONFLICT,
                "Username already taken. Please choose another.",
            )
        };
    }

    let id = {
        let mut next = fx.next_patient_id.lock().unwrap();
        let id = *next;
        *next += 1;
        id.to_string()
    };
    let acct = Account {
        id,
        username: username.clone(),
        full_name: body["full_name"].as_str().unwrap_or("").to_string(),
        email: body["email"].as_str().unwrap_or("").to_string(),
        role: "patient".to_string(),
        password: body["password"].as_str().unwrap_or("").to_string(),
        staff: false,
    };
    let response = auth_json(&acct);
    users.insert(username, acct);
    (StatusCode::OK, Json(response))
}

fn account_for_token(fx: &Fixture, headers: &HeaderMap) -> Option<Account> {
    let token = headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .to_string();
    let id = token.strip_prefix("tok-")?;
    let users = fx.users.lock().unwrap();
    users.values().find(|a| a.id == id).cloned()
}

async fn change_password(
    State(fx): State<Arc<Fixture>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let Some(acct) = account_for_token(&fx, &headers) else {
        return detail(StatusCode::UNAUTHORIZED, "Authentication required.");
    };
    let current = body["current_password"].as_str().unwrap_or("");
    if acct.password != current {
        return detail(StatusCode::BAD_REQUEST, "Current password is incorrect.");
    }
    let new = body["new_password"].as_str().unwrap_or("").to_string();
    let mut users = fx.users.lock().unwrap();
    if let Some(stored) = users.get_mut(&acct.username) {
        stored.password = new;
    }
    (StatusCode::OK, Json(json!({"message": "Password updated."})))
}

async fn audit(
    State(fx): State<Arc<Fixture>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    if account_for_token(&fx, &headers).is_none() {
        return detail(StatusCode::UNAUTHORIZED, "Authentication required.");
    }
    (
        StatusCode::OK,
        Json(json!([
            {"id": "a-1", "action": "auth.login.success", "user": "physician",
             "timestamp": "2025-02-07T09:15:00Z"},
            {"id": "a-2", "action": "resource.read", "user": "nurse",
             "patient_id": "2", "timestamp": "2025-02-07T09:20:00Z"}
        ])),
    )
}

/// Start the fixture backend; returns the API base URL
pub async fn spawn_backend() -> String {
    let state = Arc::new(Fixture::default());
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/change-password", post(change_password))
        .route("/api/audit", get(audit))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}
