//! REST API layer: route handlers, DTOs, router composition and the
//! OpenAPI document.
//!
//! Resource endpoints are mounted under `/api/v1`; `/health` sits at the
//! root.

pub mod dto;
pub mod extract;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "EventFlow API",
        description = "Event discovery, simulated ticket booking and AI event recommendations."
    ),
    paths(
        handlers::system::health_handler,
        handlers::system::navigation_handler,
        handlers::dashboard::dashboard,
        handlers::recommendations::recommend,
        handlers::events::list_events,
        handlers::events::get_event,
        handlers::booking_dialogs::open_dialog,
        handlers::booking_dialogs::get_dialog,
        handlers::booking_dialogs::select_quantity,
        handlers::booking_dialogs::proceed,
        handlers::booking_dialogs::back,
        handlers::booking_dialogs::pay,
        handlers::booking_dialogs::close,
        handlers::booking_dialogs::reopen,
        handlers::booking_dialogs::discard,
        handlers::bookings::list_bookings,
        handlers::bookings::get_booking,
        handlers::bookings::cancel_booking,
        handlers::admin::overview,
        handlers::admin::list_users,
        handlers::admin::get_user,
        handlers::admin::list_events,
        handlers::admin::list_bookings,
    ),
    tags(
        (name = "System", description = "Health and navigation"),
        (name = "Dashboard", description = "Featured events"),
        (name = "Recommendations", description = "AI event recommendations"),
        (name = "Events", description = "Event listing and details"),
        (name = "Booking Dialogs", description = "Three-step ticket booking"),
        (name = "Bookings", description = "Booking history"),
        (name = "Admin", description = "Read-only administration"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes())
}

/// Swagger UI at `/swagger-ui`, serving the document at
/// `/api-docs/openapi.json`.
#[cfg(feature = "swagger-ui")]
#[must_use]
pub fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/v1/events/{id}",
            "/api/v1/booking-dialogs/{id}/pay",
            "/api/v1/bookings/{id}/cancel",
            "/api/v1/admin/overview",
            "/api/v1/recommendations",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
