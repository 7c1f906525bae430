//! Dashboard handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::DashboardResponse;
use crate::app_state::AppState;
use crate::catalog::EventFilter;
use crate::view::EventCardView;

/// `GET /dashboard`: Featured events and recommendation form copy.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "Dashboard",
    summary = "Dashboard",
    description = "Returns the first events of the catalog as cards, plus the static copy of the recommendation form.",
    responses(
        (status = 200, description = "Dashboard contents", body = DashboardResponse),
    )
)]
pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let featured: Vec<EventCardView> = state
        .catalog
        .list_events(&EventFilter::all())
        .await
        .iter()
        .take(state.featured_event_count)
        .map(EventCardView::from)
        .collect();
    Json(DashboardResponse::new(featured))
}

/// Dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}
