//! Shared application state injected into all Axum handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::recommendation::RecommendationService;
use crate::service::BookingService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only events, bookings and users.
    pub catalog: Arc<dyn Catalog>,
    /// Booking dialog sessions and cancellations.
    pub bookings: Arc<BookingService>,
    /// AI recommendations.
    pub recommendations: RecommendationService,
    /// Number of event cards shown on the dashboard.
    pub featured_event_count: usize,
}

impl AppState {
    /// Wires the services around `catalog` and `recommendations`. Booking
    /// dialogs idle for longer than `dialog_idle_ttl` are evicted.
    #[must_use]
    pub fn new(
        catalog: Arc<dyn Catalog>,
        recommendations: RecommendationService,
        featured_event_count: usize,
        dialog_idle_ttl: Duration,
    ) -> Self {
        let registry = Arc::new(crate::domain::DialogRegistry::with_idle_ttl(dialog_idle_ttl));
        let bookings = Arc::new(BookingService::new(Arc::clone(&catalog), registry));
        Self {
            catalog,
            bookings,
            recommendations,
            featured_event_count,
        }
    }
}
