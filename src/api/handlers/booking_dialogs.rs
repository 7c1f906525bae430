//! Booking dialog handlers: open, step through, close, discard.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::api::dto::QuantityRequest;
use crate::api::extract::ApiJson;
use crate::app_state::AppState;
use crate::domain::{DialogId, EventId, PaymentDetails};
use crate::error::{AppError, ErrorResponse};
use crate::view::DialogView;

/// `POST /events/{id}/booking-dialogs`: Open a booking dialog ("Book
/// Tickets").
///
/// # Errors
///
/// Returns [`AppError::EventNotFound`] if no event has the given ID.
#[utoipa::path(
    post,
    path = "/api/v1/events/{id}/booking-dialogs",
    tag = "Booking Dialogs",
    summary = "Open a booking dialog",
    description = "Starts a booking dialog session for the event, visible at the selection step with one ticket.",
    params(
        ("id" = String, Path, description = "Event ID"),
    ),
    responses(
        (status = 201, description = "Dialog opened", body = DialogView),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn open_dialog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.bookings.open_dialog(&EventId::from(id)).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// `GET /booking-dialogs/{id}`: Current dialog state.
///
/// # Errors
///
/// Returns [`AppError::DialogNotFound`] for unknown sessions.
#[utoipa::path(
    get,
    path = "/api/v1/booking-dialogs/{id}",
    tag = "Booking Dialogs",
    summary = "Get a booking dialog",
    params(
        ("id" = uuid::Uuid, Path, description = "Dialog UUID"),
    ),
    responses(
        (status = 200, description = "Dialog state", body = DialogView),
        (status = 404, description = "Dialog not found", body = ErrorResponse),
    )
)]
pub async fn get_dialog(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.bookings.dialog(DialogId::from_uuid(id)).await?;
    Ok(Json(view))
}

/// `PUT /booking-dialogs/{id}/quantity`: Select the ticket quantity.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for quantities outside 1–4,
/// [`AppError::InvalidRequest`] for a malformed body and
/// [`AppError::DialogConflict`] outside the selection step.
#[utoipa::path(
    put,
    path = "/api/v1/booking-dialogs/{id}/quantity",
    tag = "Booking Dialogs",
    summary = "Select ticket quantity",
    params(
        ("id" = uuid::Uuid, Path, description = "Dialog UUID"),
    ),
    request_body = QuantityRequest,
    responses(
        (status = 200, description = "Quantity selected", body = DialogView),
        (status = 400, description = "Quantity outside 1-4 or malformed body", body = ErrorResponse),
        (status = 404, description = "Dialog not found", body = ErrorResponse),
        (status = 409, description = "Not on the selection step", body = ErrorResponse),
    )
)]
pub async fn select_quantity(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    ApiJson(req): ApiJson<QuantityRequest>,
) -> Result<impl IntoResponse, AppError> {
    let view = state
        .bookings
        .select_quantity(DialogId::from_uuid(id), req.quantity)
        .await?;
    Ok(Json(view))
}

/// `POST /booking-dialogs/{id}/proceed`: Move to the payment step.
///
/// # Errors
///
/// Returns [`AppError::DialogConflict`] outside the selection step.
#[utoipa::path(
    post,
    path = "/api/v1/booking-dialogs/{id}/proceed",
    tag = "Booking Dialogs",
    summary = "Proceed to payment",
    params(
        ("id" = uuid::Uuid, Path, description = "Dialog UUID"),
    ),
    responses(
        (status = 200, description = "Payment step", body = DialogView),
        (status = 404, description = "Dialog not found", body = ErrorResponse),
        (status = 409, description = "Not on the selection step", body = ErrorResponse),
    )
)]
pub async fn proceed(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = state
        .bookings
        .proceed_to_payment(DialogId::from_uuid(id))
        .await?;
    Ok(Json(view))
}

/// `POST /booking-dialogs/{id}/back`: Return to the selection step.
///
/// # Errors
///
/// Returns [`AppError::DialogConflict`] outside the payment step.
#[utoipa::path(
    post,
    path = "/api/v1/booking-dialogs/{id}/back",
    tag = "Booking Dialogs",
    summary = "Back to selection",
    params(
        ("id" = uuid::Uuid, Path, description = "Dialog UUID"),
    ),
    responses(
        (status = 200, description = "Selection step", body = DialogView),
        (status = 404, description = "Dialog not found", body = ErrorResponse),
        (status = 409, description = "Not on the payment step", body = ErrorResponse),
    )
)]
pub async fn back(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.bookings.back(DialogId::from_uuid(id)).await?;
    Ok(Json(view))
}

/// `POST /booking-dialogs/{id}/pay`: Simulate the payment.
///
/// # Errors
///
/// Returns [`AppError::InvalidRequest`] for a malformed body and
/// [`AppError::DialogConflict`] outside the payment step.
#[utoipa::path(
    post,
    path = "/api/v1/booking-dialogs/{id}/pay",
    tag = "Booking Dialogs",
    summary = "Simulate payment",
    description = "Accepts any card fields and moves to the confirmation step. Only the last four digits of the card number are kept, on the receipt.",
    params(
        ("id" = uuid::Uuid, Path, description = "Dialog UUID"),
    ),
    request_body = PaymentDetails,
    responses(
        (status = 200, description = "Booking confirmed", body = DialogView),
        (status = 400, description = "Body is not valid JSON", body = ErrorResponse),
        (status = 404, description = "Dialog not found", body = ErrorResponse),
        (status = 409, description = "Not on the payment step", body = ErrorResponse),
    )
)]
pub async fn pay(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    ApiJson(details): ApiJson<PaymentDetails>,
) -> Result<impl IntoResponse, AppError> {
    let view = state
        .bookings
        .pay(DialogId::from_uuid(id), &details)
        .await?;
    Ok(Json(view))
}

/// `POST /booking-dialogs/{id}/close`: Close and reset the dialog.
///
/// # Errors
///
/// Returns [`AppError::DialogNotFound`] for unknown sessions.
#[utoipa::path(
    post,
    path = "/api/v1/booking-dialogs/{id}/close",
    tag = "Booking Dialogs",
    summary = "Close the dialog",
    description = "Hides the dialog and resets it to the selection step with one ticket.",
    params(
        ("id" = uuid::Uuid, Path, description = "Dialog UUID"),
    ),
    responses(
        (status = 200, description = "Dialog closed", body = DialogView),
        (status = 404, description = "Dialog not found", body = ErrorResponse),
    )
)]
pub async fn close(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.bookings.close(DialogId::from_uuid(id)).await?;
    Ok(Json(view))
}

/// `POST /booking-dialogs/{id}/open`: Show a closed dialog again.
///
/// # Errors
///
/// Returns [`AppError::DialogNotFound`] for unknown sessions.
#[utoipa::path(
    post,
    path = "/api/v1/booking-dialogs/{id}/open",
    tag = "Booking Dialogs",
    summary = "Reopen the dialog",
    params(
        ("id" = uuid::Uuid, Path, description = "Dialog UUID"),
    ),
    responses(
        (status = 200, description = "Dialog visible", body = DialogView),
        (status = 404, description = "Dialog not found", body = ErrorResponse),
    )
)]
pub async fn reopen(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.bookings.reopen(DialogId::from_uuid(id)).await?;
    Ok(Json(view))
}

/// `DELETE /booking-dialogs/{id}`: Discard the session.
///
/// # Errors
///
/// Returns [`AppError::DialogNotFound`] for unknown sessions.
#[utoipa::path(
    delete,
    path = "/api/v1/booking-dialogs/{id}",
    tag = "Booking Dialogs",
    summary = "Discard the dialog",
    params(
        ("id" = uuid::Uuid, Path, description = "Dialog UUID"),
    ),
    responses(
        (status = 204, description = "Dialog discarded"),
        (status = 404, description = "Dialog not found", body = ErrorResponse),
    )
)]
pub async fn discard(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.bookings.discard(DialogId::from_uuid(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Booking dialog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events/{id}/booking-dialogs", post(open_dialog))
        .route("/booking-dialogs/{id}", get(get_dialog).delete(discard))
        .route("/booking-dialogs/{id}/quantity", put(select_quantity))
        .route("/booking-dialogs/{id}/proceed", post(proceed))
        .route("/booking-dialogs/{id}/back", post(back))
        .route("/booking-dialogs/{id}/pay", post(pay))
        .route("/booking-dialogs/{id}/close", post(close))
        .route("/booking-dialogs/{id}/open", post(reopen))
}
