//! Event listing and detail handlers.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{EventListParams, EventListResponse};
use crate::app_state::AppState;
use crate::domain::EventId;
use crate::error::{AppError, ErrorResponse};
use crate::view::{EventCardView, EventDetailView, FilterOptionsView};

/// `GET /events`: List events matching the filter controls.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for an unknown category or a malformed
/// date.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "Events",
    summary = "List events",
    description = "Returns event cards ordered by date. Keyword, category, location and date filters combine; blank values are ignored.",
    params(EventListParams),
    responses(
        (status = 200, description = "Matching events", body = EventListResponse),
        (status = 400, description = "Invalid filter value", body = ErrorResponse),
    )
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = params.to_filter()?;
    let data: Vec<EventCardView> = state
        .catalog
        .list_events(&filter)
        .await
        .iter()
        .map(EventCardView::from)
        .collect();
    let filters = FilterOptionsView::new(state.catalog.locations().await);

    Ok(Json(EventListResponse {
        total: data.len(),
        data,
        filters,
    }))
}

/// `GET /events/{id}`: Event detail page.
///
/// # Errors
///
/// Returns [`AppError::EventNotFound`] if no event has the given ID.
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}",
    tag = "Events",
    summary = "Get event details",
    description = "Returns the detail view of one event, including the ticket quantities offered by the booking dialog.",
    params(
        ("id" = String, Path, description = "Event ID"),
    ),
    responses(
        (status = 200, description = "Event details", body = EventDetailView),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.catalog.get_event(&EventId::from(id)).await?;
    Ok(Json(EventDetailView::from(&event)))
}

/// Event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/{id}", get(get_event))
}
