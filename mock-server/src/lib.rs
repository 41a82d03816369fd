use std::{
    collections::{BTreeMap, HashMap, HashSet},
    sync::Arc,
};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "password";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProvider {
    pub key: String,
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub associated_city: String,
    pub tags: Vec<String>,
    pub is_verified: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub key: String,
    pub name: String,
    pub is_verified: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub key: String,
    pub is_verified: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeneralInformation {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub city_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewServiceProvider {
    pub name: String,
    #[serde(default)]
    pub associated_city: String,
}

#[derive(Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_token: String,
    pub auth_claims: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct Messages {
    pub messages: Vec<String>,
}

#[derive(Default)]
pub struct Store {
    pub providers: BTreeMap<String, ServiceProvider>,
    pub sessions: HashSet<String>,
    pub users: HashMap<String, String>,
}

pub type Db = Arc<RwLock<Store>>;

/// Router over a store seeded with two providers and one admin user.
pub fn app() -> Router {
    app_with(seeded())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/service-providers", get(list_providers).post(create_provider))
        .route("/service-providers/{key}", get(get_provider))
        .route(
            "/service-providers/{key}/general-information",
            put(update_general_information),
        )
        .route("/service-provider-verifications", post(set_verification))
        .route("/sessions/create", post(create_session))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub fn seeded() -> Store {
    let mut store = Store::default();
    store
        .users
        .insert(ADMIN_USERNAME.to_string(), ADMIN_PASSWORD.to_string());
    for provider in [
        ServiceProvider {
            key: "albert-kennedy-trust".to_string(),
            name: "Albert Kennedy Trust".to_string(),
            associated_city: "manchester".to_string(),
            tags: vec!["lgbt".to_string(), "young-people".to_string()],
            is_verified: true,
            ..Default::default()
        },
        ServiceProvider {
            key: "coffee4craig".to_string(),
            name: "Coffee 4 Craig".to_string(),
            description: "initial description".to_string(),
            associated_city: "manchester".to_string(),
            tags: vec!["charity".to_string()],
            ..Default::default()
        },
    ] {
        store.providers.insert(provider.key.clone(), provider);
    }
    store
}

/// Lower-case the name and collapse everything that is not alphanumeric
/// into single dashes.
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn rejected(status: StatusCode, messages: &[&str]) -> Response {
    let body = Messages {
        messages: messages.iter().map(|m| m.to_string()).collect(),
    };
    (status, Json(body)).into_response()
}

async fn authorised(db: &Db, headers: &HeaderMap) -> Result<(), Response> {
    let token = headers
        .get("session-token")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if db.read().await.sessions.contains(token) {
        Ok(())
    } else {
        Err(rejected(StatusCode::UNAUTHORIZED, &["Please log in"]))
    }
}

async fn list_providers(State(db): State<Db>) -> Json<Vec<Summary>> {
    let store = db.read().await;
    Json(
        store
            .providers
            .values()
            .map(|p| Summary {
                key: p.key.clone(),
                name: p.name.clone(),
                is_verified: p.is_verified,
            })
            .collect(),
    )
}

async fn create_provider(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<NewServiceProvider>,
) -> Response {
    if let Err(denied) = authorised(&db, &headers).await {
        return denied;
    }

    let mut messages = Vec::new();
    if input.name.trim().is_empty() {
        messages.push("Name is required");
    }
    if input.associated_city.trim().is_empty() {
        messages.push("City is required");
    }
    if !messages.is_empty() {
        return rejected(StatusCode::BAD_REQUEST, &messages);
    }

    let key = slug(&input.name);
    let mut store = db.write().await;
    if store.providers.contains_key(&key) {
        return rejected(StatusCode::BAD_REQUEST, &["Service provider already exists"]);
    }
    tracing::info!(%key, "service provider created");
    store.providers.insert(
        key.clone(),
        ServiceProvider {
            key,
            name: input.name,
            associated_city: input.associated_city,
            ..Default::default()
        },
    );
    StatusCode::CREATED.into_response()
}

async fn get_provider(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(key): Path<String>,
) -> Response {
    if let Err(denied) = authorised(&db, &headers).await {
        return denied;
    }
    let store = db.read().await;
    match store.providers.get(&key) {
        Some(provider) => Json(provider.clone()).into_response(),
        None => rejected(StatusCode::NOT_FOUND, &["Service provider not found"]),
    }
}

async fn update_general_information(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(key): Path<String>,
    Json(input): Json<GeneralInformation>,
) -> Response {
    if let Err(denied) = authorised(&db, &headers).await {
        return denied;
    }
    if input.name.trim().is_empty() {
        return rejected(StatusCode::BAD_REQUEST, &["Name is required"]);
    }

    let mut store = db.write().await;
    let Some(provider) = store.providers.get_mut(&key) else {
        return rejected(StatusCode::NOT_FOUND, &["Service provider not found"]);
    };
    provider.name = input.name;
    provider.description = input.description;
    provider.short_description = input.short_description;
    provider.associated_city = input.city_id;
    provider.tags = input.tags;
    tracing::info!(%key, "general information updated");
    Json(serde_json::json!({})).into_response()
}

async fn set_verification(State(db): State<Db>, Json(input): Json<Verification>) -> Response {
    let mut store = db.write().await;
    match store.providers.get_mut(&input.key) {
        Some(provider) => {
            provider.is_verified = input.is_verified;
            tracing::info!(key = %input.key, verified = input.is_verified, "verification set");
            Json(serde_json::json!({})).into_response()
        }
        None => rejected(StatusCode::NOT_FOUND, &["Service provider not found"]),
    }
}

async fn create_session(State(db): State<Db>, Json(input): Json<Credentials>) -> Response {
    let mut store = db.write().await;
    if store.users.get(&input.username) != Some(&input.password) {
        return rejected(StatusCode::UNAUTHORIZED, &["Invalid credentials"]);
    }
    let token = Uuid::new_v4().to_string();
    store.sessions.insert(token.clone());
    let session = Session {
        session_token: token,
        auth_claims: vec!["SuperAdmin".to_string()],
    };
    (StatusCode::CREATED, Json(session)).into_response()
}
