//! Admin panel handlers. Read-only: users, events, bookings, totals.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{AdminBookingListResponse, AdminEventListResponse, AdminUserListResponse};
use crate::app_state::AppState;
use crate::catalog::EventFilter;
use crate::domain::UserId;
use crate::error::{AppError, ErrorResponse};
use crate::view::{AdminBookingRow, AdminEventRow, AdminOverview, AdminUserRow};

/// `GET /admin/overview`: Platform totals.
#[utoipa::path(
    get,
    path = "/api/v1/admin/overview",
    tag = "Admin",
    summary = "Platform overview",
    description = "Counts users, events and bookings, with users per role and bookings per status.",
    responses(
        (status = 200, description = "Totals", body = AdminOverview),
    )
)]
pub async fn overview(State(state): State<AppState>) -> impl IntoResponse {
    let users = state.catalog.list_users().await;
    let events = state.catalog.list_events(&EventFilter::all()).await;
    let bookings = state.catalog.list_bookings().await;
    Json(AdminOverview::new(&users, &events, &bookings))
}

/// `GET /admin/users`: User table.
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    tag = "Admin",
    summary = "List users",
    responses(
        (status = 200, description = "User rows", body = AdminUserListResponse),
    )
)]
pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    let data: Vec<AdminUserRow> = state
        .catalog
        .list_users()
        .await
        .iter()
        .map(AdminUserRow::from)
        .collect();
    Json(AdminUserListResponse {
        total: data.len(),
        data,
    })
}

/// `GET /admin/users/{id}`: Single user row.
///
/// # Errors
///
/// Returns [`AppError::UserNotFound`] if no user has the given ID.
#[utoipa::path(
    get,
    path = "/api/v1/admin/users/{id}",
    tag = "Admin",
    summary = "Get a user",
    params(
        ("id" = String, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User row", body = AdminUserRow),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.catalog.get_user(&UserId::from(id)).await?;
    Ok(Json(AdminUserRow::from(&user)))
}

/// `GET /admin/events`: Event table.
#[utoipa::path(
    get,
    path = "/api/v1/admin/events",
    tag = "Admin",
    summary = "List events for administration",
    responses(
        (status = 200, description = "Event rows", body = AdminEventListResponse),
    )
)]
pub async fn list_events(State(state): State<AppState>) -> impl IntoResponse {
    let data: Vec<AdminEventRow> = state
        .catalog
        .list_events(&EventFilter::all())
        .await
        .iter()
        .map(AdminEventRow::from)
        .collect();
    Json(AdminEventListResponse {
        total: data.len(),
        data,
    })
}

/// `GET /admin/bookings`: Booking table.
#[utoipa::path(
    get,
    path = "/api/v1/admin/bookings",
    tag = "Admin",
    summary = "List bookings for administration",
    responses(
        (status = 200, description = "Booking rows", body = AdminBookingListResponse),
    )
)]
pub async fn list_bookings(State(state): State<AppState>) -> impl IntoResponse {
    let data: Vec<AdminBookingRow> = state
        .catalog
        .list_bookings()
        .await
        .iter()
        .map(AdminBookingRow::from)
        .collect();
    Json(AdminBookingListResponse {
        total: data.len(),
        data,
    })
}

/// Admin routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/overview", get(overview))
        .route("/admin/users", get(list_users))
        .route("/admin/users/{id}", get(get_user))
        .route("/admin/events", get(list_events))
        .route("/admin/bookings", get(list_bookings))
}
