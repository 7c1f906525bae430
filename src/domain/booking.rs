//! Booking history records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::BookingId;

/// Booking status shown as a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum BookingStatus {
    /// Paid and confirmed.
    Confirmed,
    /// Awaiting confirmation.
    Pending,
    /// Cancelled by the user or organizer.
    Cancelled,
}

impl BookingStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 3] = [Self::Confirmed, Self::Pending, Self::Cancelled];

    /// Display name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's reservation against an event.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique booking identifier.
    pub id: BookingId,
    /// Title of the booked event.
    pub event_title: String,
    /// Day of the booked event.
    pub event_date: NaiveDate,
    /// Venue of the booked event.
    pub location: String,
    /// Day the booking was made.
    pub booking_date: NaiveDate,
    /// Current status.
    pub status: BookingStatus,
}
