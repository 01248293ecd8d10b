//! In-memory stub of the user-records backend.
//!
//! Serves the REST surface the client expects under `/api`: a health
//! probe plus CRUD on `/users`. The server owns everything the client
//! must never fabricate — ids (v4 UUIDs) and `createdAt` timestamps —
//! and mirrors the real backend's field validation: blank name or
//! email, or an email without a `local@domain.tld` shape, is rejected
//! with 400 and a per-field error body.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create and update both carry the full editable field set.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}

pub type Db = Arc<RwLock<HashMap<Uuid, User>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    let api = Router::new()
        .route("/health", get(health))
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let users = db.read().await;
    let mut all: Vec<User> = users.values().cloned().collect();
    // HashMap iteration order is arbitrary; keep list output stable.
    all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    Json(all)
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<UserPayload>,
) -> Result<(StatusCode, Json<User>), (StatusCode, Json<Value>)> {
    validate(&input)?;
    let user = User {
        id: Uuid::new_v4(),
        name: input.name,
        email: input.email,
        created_at: Some(Utc::now()),
    };
    db.write().await.insert(user.id, user.clone());
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<User>, StatusCode> {
    let users = db.read().await;
    users.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UserPayload>,
) -> Result<Json<User>, (StatusCode, Json<Value>)> {
    validate(&input)?;
    let mut users = db.write().await;
    let user = users
        .get_mut(&id)
        .ok_or((StatusCode::NOT_FOUND, Json(json!({ "error": "user not found" }))))?;
    user.name = input.name;
    user.email = input.email;
    Ok(Json(user.clone()))
}

async fn delete_user(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<StatusCode, StatusCode> {
    let mut users = db.write().await;
    users.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

/// Field validation matching the real backend: name and email must be
/// non-blank and the email must look like `local@domain.tld`.
fn validate(input: &UserPayload) -> Result<(), (StatusCode, Json<Value>)> {
    let mut errors = serde_json::Map::new();
    if input.name.trim().is_empty() {
        errors.insert("name".to_string(), json!("Name is required"));
    }
    if input.email.trim().is_empty() {
        errors.insert("email".to_string(), json!("Email is required"));
    } else if !email_shape_ok(&input.email) {
        errors.insert("email".to_string(), json!("Email should be valid"));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err((StatusCode::BAD_REQUEST, Json(Value::Object(errors))))
    }
}

fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
