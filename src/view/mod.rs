//! Display-ready view models.
//!
//! Everything here is a pure function of catalog snapshots and dialog
//! state: formatting, badges, table rows, cards and the sidebar menu.

pub mod admin;
pub mod badge;
pub mod bookings;
pub mod dialog;
pub mod events;
pub mod format;
pub mod navigation;

pub use admin::{AdminBookingRow, AdminEventRow, AdminOverview, AdminUserRow};
pub use badge::{Badge, BadgeVariant};
pub use bookings::{BookingRowView, RowAction, Toast};
pub use dialog::{DialogView, ReceiptView};
pub use events::{EventCardView, EventDetailView, FilterOptionsView};
pub use navigation::{MenuItem, is_active, menu};
