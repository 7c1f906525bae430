//! Booking history handlers: list, view ticket, cancel.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::BookingListResponse;
use crate::app_state::AppState;
use crate::domain::BookingId;
use crate::error::{AppError, ErrorResponse};
use crate::view::{BookingRowView, Toast};

/// `GET /bookings`: "My Bookings" table.
#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    summary = "List bookings",
    description = "Returns the booking history rows with status badges and row actions.",
    responses(
        (status = 200, description = "Booking rows", body = BookingListResponse),
    )
)]
pub async fn list_bookings(State(state): State<AppState>) -> impl IntoResponse {
    let data: Vec<BookingRowView> = state
        .catalog
        .list_bookings()
        .await
        .iter()
        .map(BookingRowView::from)
        .collect();
    Json(BookingListResponse {
        total: data.len(),
        data,
    })
}

/// `GET /bookings/{id}`: "View Ticket".
///
/// # Errors
///
/// Returns [`AppError::BookingNotFound`] if no booking has the given ID.
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    summary = "Get a booking",
    params(
        ("id" = String, Path, description = "Booking ID"),
    ),
    responses(
        (status = 200, description = "Booking row", body = BookingRowView),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.catalog.get_booking(&BookingId::from(id)).await?;
    Ok(Json(BookingRowView::from(&booking)))
}

/// `POST /bookings/{id}/cancel`: "Cancel Booking".
///
/// # Errors
///
/// Returns [`AppError::BookingNotFound`] if no booking has the given ID.
#[utoipa::path(
    post,
    path = "/api/v1/bookings/{id}/cancel",
    tag = "Bookings",
    summary = "Cancel a booking",
    description = "Acknowledges the cancellation with a toast. The booking record is not changed.",
    params(
        ("id" = String, Path, description = "Booking ID"),
    ),
    responses(
        (status = 200, description = "Cancellation toast", body = Toast),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let toast = state.bookings.cancel_booking(&BookingId::from(id)).await?;
    Ok(Json(toast))
}

/// Booking history routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(list_bookings))
        .route("/bookings/{id}", get(get_booking))
        .route("/bookings/{id}/cancel", post(cancel_booking))
}
