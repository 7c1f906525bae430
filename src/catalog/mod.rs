//! Read-only data layer.
//!
//! [`Catalog`] is the query interface the rest of the service depends on.
//! [`StaticCatalog`] implements it over the in-memory seed records; a
//! database-backed implementation can replace it without touching the
//! handlers or views.

pub mod filter;
pub mod memory;
pub mod seed;

use async_trait::async_trait;

pub use filter::EventFilter;
pub use memory::StaticCatalog;

use crate::domain::{Booking, BookingId, Event, EventId, User, UserId};

/// Errors returned by catalog lookups and construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No event has the requested ID.
    #[error("event not found: {0}")]
    EventNotFound(EventId),

    /// No booking has the requested ID.
    #[error("booking not found: {0}")]
    BookingNotFound(BookingId),

    /// No user has the requested ID.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// Two records of the same kind share an ID.
    #[error("duplicate {kind} id: {id}")]
    DuplicateId {
        /// Record kind (`"event"`, `"booking"`, `"user"`).
        kind: &'static str,
        /// The repeated identifier.
        id: String,
    },
}

/// Query interface over events, bookings and users.
#[async_trait]
pub trait Catalog: Send + Sync + std::fmt::Debug {
    /// Events matching `filter`, ordered by date then ID.
    async fn list_events(&self, filter: &EventFilter) -> Vec<Event>;

    /// Looks up a single event.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EventNotFound`] for unknown IDs.
    async fn get_event(&self, id: &EventId) -> Result<Event, CatalogError>;

    /// All bookings in the booking history.
    async fn list_bookings(&self) -> Vec<Booking>;

    /// Looks up a single booking.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::BookingNotFound`] for unknown IDs.
    async fn get_booking(&self, id: &BookingId) -> Result<Booking, CatalogError>;

    /// All registered users.
    async fn list_users(&self) -> Vec<User>;

    /// Looks up a single user.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UserNotFound`] for unknown IDs.
    async fn get_user(&self, id: &UserId) -> Result<User, CatalogError>;

    /// Distinct event venues in first-seen order, for the location filter.
    async fn locations(&self) -> Vec<String>;
}
