//! Admin panel tables and summary.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::badge::Badge;
use super::bookings::RowAction;
use super::format::{format_inr, format_short_date};
use crate::domain::{Booking, BookingId, BookingStatus, Event, EventId, Role, User, UserId};

/// Row of the admin user table.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminUserRow {
    /// User identifier.
    pub id: UserId,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Role badge.
    pub role: Badge,
    /// Registration day (`15/1/2023`).
    pub joined_date: String,
}

impl From<&User> for AdminUserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.into(),
            joined_date: format_short_date(user.joined_date),
        }
    }
}

/// Row of the admin event table.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminEventRow {
    /// Event identifier.
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Category badge.
    pub category: Badge,
    /// Event day.
    pub date: String,
    /// Venue.
    pub location: String,
    /// Ticket price.
    pub price: String,
}

impl From<&Event> for AdminEventRow {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            category: event.category.into(),
            date: format_short_date(event.date),
            location: event.location.clone(),
            price: format_inr(event.price),
        }
    }
}

/// Row of the admin booking table. Only cancellation is offered.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminBookingRow {
    /// Booking identifier.
    pub id: BookingId,
    /// Booked event.
    pub event_title: String,
    /// Event day.
    pub event_date: String,
    /// Day the booking was made.
    pub booking_date: String,
    /// Status badge.
    pub status: Badge,
    /// Row action menu.
    pub actions: Vec<RowAction>,
}

impl From<&Booking> for AdminBookingRow {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id.clone(),
            event_title: booking.event_title.clone(),
            event_date: format_short_date(booking.event_date),
            booking_date: format_short_date(booking.booking_date),
            status: booking.status.into(),
            actions: vec![RowAction::cancel_booking(&booking.id)],
        }
    }
}

/// Platform totals shown above the admin tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdminOverview {
    /// Number of users.
    pub total_users: usize,
    /// Number of events.
    pub total_events: usize,
    /// Number of bookings.
    pub total_bookings: usize,
    /// Users per role, every role present.
    pub users_by_role: BTreeMap<String, usize>,
    /// Bookings per status, every status present.
    pub bookings_by_status: BTreeMap<String, usize>,
}

impl AdminOverview {
    /// Summarises the catalog snapshot.
    #[must_use]
    pub fn new(users: &[User], events: &[Event], bookings: &[Booking]) -> Self {
        let users_by_role = Role::ALL
            .iter()
            .map(|role| {
                let count = users.iter().filter(|u| u.role == *role).count();
                (role.to_string(), count)
            })
            .collect();
        let bookings_by_status = BookingStatus::ALL
            .iter()
            .map(|status| {
                let count = bookings.iter().filter(|b| b.status == *status).count();
                (status.to_string(), count)
            })
            .collect();
        Self {
            total_users: users.len(),
            total_events: events.len(),
            total_bookings: bookings.len(),
            users_by_role,
            bookings_by_status,
        }
    }
}
