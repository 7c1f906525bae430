//! REST endpoint handlers organized by resource.

pub mod admin;
pub mod booking_dialogs;
pub mod bookings;
pub mod dashboard;
pub mod events;
pub mod recommendations;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(system::api_routes())
        .merge(dashboard::routes())
        .merge(recommendations::routes())
        .merge(events::routes())
        .merge(booking_dialogs::routes())
        .merge(bookings::routes())
        .merge(admin::routes())
}
