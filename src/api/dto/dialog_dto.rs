//! Booking dialog request bodies.

use serde::Deserialize;
use utoipa::ToSchema;

/// `PUT /booking-dialogs/{id}/quantity` body.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct QuantityRequest {
    /// Number of tickets, 1 to 4; other integers get a `quantity` error.
    pub quantity: i64,
}
