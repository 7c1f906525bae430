//! In-memory catalog over seed records.

use std::collections::HashSet;

use async_trait::async_trait;

use super::{Catalog, CatalogError, EventFilter, seed};
use crate::domain::{Booking, BookingId, Event, EventId, User, UserId};

/// Immutable snapshot of events, bookings and users held in memory.
///
/// Built once at startup; nothing ever writes back to it.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    events: Vec<Event>,
    bookings: Vec<Booking>,
    users: Vec<User>,
}

impl StaticCatalog {
    /// Builds a catalog from the given records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two records of the same kind
    /// share an ID.
    pub fn new(
        events: Vec<Event>,
        bookings: Vec<Booking>,
        users: Vec<User>,
    ) -> Result<Self, CatalogError> {
        ensure_unique("event", events.iter().map(|e| e.id.as_str()))?;
        ensure_unique("booking", bookings.iter().map(|b| b.id.as_str()))?;
        ensure_unique("user", users.iter().map(|u| u.id.as_str()))?;
        Ok(Self {
            events,
            bookings,
            users,
        })
    }

    /// Catalog loaded with the built-in placeholder records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if the seed data is inconsistent.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seed::events(), seed::bookings(), seed::users())
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn list_events(&self, filter: &EventFilter) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .events
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        events
    }

    async fn get_event(&self, id: &EventId) -> Result<Event, CatalogError> {
        self.events
            .iter()
            .find(|e| &e.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::EventNotFound(id.clone()))
    }

    async fn list_bookings(&self) -> Vec<Booking> {
        self.bookings.clone()
    }

    async fn get_booking(&self, id: &BookingId) -> Result<Booking, CatalogError> {
        self.bookings
            .iter()
            .find(|b| &b.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::BookingNotFound(id.clone()))
    }

    async fn list_users(&self) -> Vec<User> {
        self.users.clone()
    }

    async fn get_user(&self, id: &UserId) -> Result<User, CatalogError> {
        self.users
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::UserNotFound(id.clone()))
    }

    async fn locations(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.events
            .iter()
            .filter(|e| seen.insert(e.location.as_str()))
            .map(|e| e.location.clone())
            .collect()
    }
}
