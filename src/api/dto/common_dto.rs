//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::view::{AdminBookingRow, AdminEventRow, AdminUserRow, BookingRowView, MenuItem};

/// Query parameters for `GET /navigation`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NavigationParams {
    /// Current page path, e.g. `/events/3`. Defaults to `/dashboard`.
    #[serde(default)]
    pub path: Option<String>,
}

impl NavigationParams {
    /// The path to highlight, falling back to the dashboard.
    #[must_use]
    pub fn current_path(&self) -> &str {
        self.path
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or("/dashboard")
    }
}

/// Sidebar menu for a page.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NavigationResponse {
    /// Path the menu was rendered for.
    pub path: String,
    /// Menu entries in display order.
    pub items: Vec<MenuItem>,
}

/// "My Bookings" table.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookingListResponse {
    /// Table rows.
    pub data: Vec<BookingRowView>,
    /// Number of rows.
    pub total: usize,
}

/// Admin user table.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminUserListResponse {
    /// Table rows.
    pub data: Vec<AdminUserRow>,
    /// Number of rows.
    pub total: usize,
}

/// Admin event table.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminEventListResponse {
    /// Table rows.
    pub data: Vec<AdminEventRow>,
    /// Number of rows.
    pub total: usize,
}

/// Admin booking table.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminBookingListResponse {
    /// Table rows.
    pub data: Vec<AdminBookingRow>,
    /// Number of rows.
    pub total: usize,
}
