//! Axum HTTP handlers for the web server
//!
//! Maps menu routes onto `MenuStore` operations and provides the capability
//! listing and health endpoints.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::menu::{MenuItem, MenuItemCandidate};
use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CapabilitiesResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [Endpoint],
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub item: MenuItem,
}

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: "GET",
        path: "/api/menu",
        description: "List all menu items",
    },
    Endpoint {
        method: "GET",
        path: "/api/menu/{id}",
        description: "Fetch a single menu item",
    },
    Endpoint {
        method: "POST",
        path: "/api/menu",
        description: "Create a menu item",
    },
    Endpoint {
        method: "PUT",
        path: "/api/menu/{id}",
        description: "Replace a menu item",
    },
    Endpoint {
        method: "DELETE",
        path: "/api/menu/{id}",
        description: "Delete a menu item",
    },
];

pub async fn capabilities() -> Json<CapabilitiesResponse> {
    Json(CapabilitiesResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS,
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    let store = state.store.lock().await;
    Json(store.list().to_vec())
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MenuItem>, AppError> {
    let id = parse_id(&id)?;
    let store = state.store.lock().await;
    let item = store.get(id)?;
    Ok(Json(item.clone()))
}

pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<MenuItem>), AppError> {
    let candidate = parse_candidate(&body);
    let mut store = state.store.lock().await;

    let item = store
        .insert(&candidate)
        .inspect_err(|err| debug!(error = %err, "menu item rejected"))?;

    info!(id = item.id, name = %item.name, "menu item created");
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<MenuItem>, AppError> {
    let id = parse_id(&id)?;
    let candidate = parse_candidate(&body);
    let mut store = state.store.lock().await;

    let item = store
        .update(id, &candidate)
        .inspect_err(|err| debug!(id, error = %err, "menu item update rejected"))?;

    info!(id = item.id, name = %item.name, "menu item updated");
    Ok(Json(item))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = parse_id(&id)?;
    let mut store = state.store.lock().await;

    let item = store.delete(id)?;

    info!(id = item.id, remaining = store.len(), "menu item deleted");
    Ok(Json(DeleteResponse {
        message: "Menu item deleted",
        item,
    }))
}

/// Unparseable ids are indistinguishable from ids that are not stored.
fn parse_id(raw: &str) -> Result<u64, AppError> {
    raw.parse::<u64>().map_err(|_| AppError::unknown_id())
}

/// Bodies that are not a JSON object validate as an empty object.
fn parse_candidate(body: &Bytes) -> MenuItemCandidate {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(candidate)) => candidate,
        _ => MenuItemCandidate::new(),
    }
}
