//! Sidebar navigation.

use serde::Serialize;
use utoipa::ToSchema;

/// Fixed sidebar entries as `(label, href)`.
pub const MENU: [(&str, &str); 4] = [
    ("Dashboard", "/dashboard"),
    ("Events", "/events"),
    ("My Bookings", "/bookings"),
    ("Admin Panel", "/admin"),
];

/// A sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MenuItem {
    /// Visible label.
    pub label: &'static str,
    /// Target path.
    pub href: &'static str,
    /// Highlighted for the current path.
    pub active: bool,
}

/// Whether the entry for `href` is highlighted at `path`.
///
/// The dashboard matches exactly; other entries match any sub-path.
#[must_use]
pub fn is_active(href: &str, path: &str) -> bool {
    if href == "/dashboard" {
        path == href
    } else {
        path.starts_with(href)
    }
}

/// The sidebar menu rendered for `path`.
#[must_use]
pub fn menu(path: &str) -> Vec<MenuItem> {
    MENU.iter()
        .map(|&(label, href)| MenuItem {
            label,
            href,
            active: is_active(href, path),
        })
        .collect()
}
