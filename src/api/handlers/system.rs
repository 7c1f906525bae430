//! System endpoints: health check and navigation.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::dto::{NavigationParams, NavigationResponse};
use crate::app_state::AppState;
use crate::view::menu;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health`: Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// `GET /navigation`: Sidebar menu with the active entry flagged.
#[utoipa::path(
    get,
    path = "/api/v1/navigation",
    tag = "System",
    summary = "Sidebar navigation",
    description = "Returns the fixed menu. `/dashboard` is active only on an exact match; other entries are active for any path under them.",
    params(NavigationParams),
    responses(
        (status = 200, description = "Menu entries", body = NavigationResponse),
    )
)]
pub async fn navigation_handler(Query(params): Query<NavigationParams>) -> impl IntoResponse {
    let path = params.current_path().to_string();
    let items = menu(&path);
    Json(NavigationResponse { path, items })
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}

/// Navigation route, mounted under /api/v1.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/navigation", get(navigation_handler))
}
