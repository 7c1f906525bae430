//! Booking history rows and the cancellation toast.

use serde::Serialize;
use utoipa::ToSchema;

use super::badge::Badge;
use super::format::format_short_date;
use crate::domain::{Booking, BookingId};

/// Per-row action in the booking history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RowAction {
    /// Menu label.
    pub label: &'static str,
    /// HTTP method of the endpoint behind the action.
    pub method: &'static str,
    /// Endpoint behind the action.
    pub href: String,
    /// Rendered in red.
    pub destructive: bool,
}

impl RowAction {
    fn view_ticket(id: &BookingId) -> Self {
        Self {
            label: "View Ticket",
            method: "GET",
            href: format!("/api/v1/bookings/{id}"),
            destructive: false,
        }
    }

    pub(crate) fn cancel_booking(id: &BookingId) -> Self {
        Self {
            label: "Cancel Booking",
            method: "POST",
            href: format!("/api/v1/bookings/{id}/cancel"),
            destructive: true,
        }
    }
}

/// One row of the "My Bookings" table.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookingRowView {
    /// Booking identifier.
    pub id: BookingId,
    /// Booked event.
    pub event_title: String,
    /// Event day (`15/8/2024`).
    pub event_date: String,
    /// Venue.
    pub location: String,
    /// Day the booking was made.
    pub booking_date: String,
    /// Status badge.
    pub status: Badge,
    /// Row action menu.
    pub actions: Vec<RowAction>,
}

impl From<&Booking> for BookingRowView {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id.clone(),
            event_title: booking.event_title.clone(),
            event_date: format_short_date(booking.event_date),
            location: booking.location.clone(),
            booking_date: format_short_date(booking.booking_date),
            status: booking.status.into(),
            actions: vec![
                RowAction::view_ticket(&booking.id),
                RowAction::cancel_booking(&booking.id),
            ],
        }
    }
}

/// Transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Toast {
    /// Bold first line.
    pub title: &'static str,
    /// Body text.
    pub description: &'static str,
    /// Style, `default` or `destructive`.
    pub variant: &'static str,
}

impl Toast {
    /// Acknowledgement shown after "Cancel Booking".
    ///
    /// The booking record itself is left untouched.
    #[must_use]
    pub const fn booking_cancelled() -> Self {
        Self {
            title: "Booking Cancelled",
            description: "Your booking has been successfully cancelled.",
            variant: "destructive",
        }
    }
}
