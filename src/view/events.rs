//! Event cards, event detail and listing filter controls.

use serde::Serialize;
use utoipa::ToSchema;

use super::badge::Badge;
use super::format::{format_detail_date, format_inr, format_long_date};
use crate::domain::{Category, Event, EventId, TicketQuantity};

/// Card shown in the dashboard and the event grid.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventCardView {
    /// Event identifier.
    pub id: EventId,
    /// Link to the detail page.
    pub href: String,
    /// Event title.
    pub title: String,
    /// Category badge.
    pub category: Badge,
    /// Long-form date (`15 August 2024`).
    pub date: String,
    /// Venue.
    pub location: String,
    /// Ticket price (`₹2,500`).
    pub price: String,
    /// Organizer line (`By FutureForward`).
    pub organizer: String,
    /// Cover image URL.
    pub image_url: String,
    /// Short hint describing the image content.
    pub image_hint: String,
}

impl From<&Event> for EventCardView {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            href: format!("/events/{}", event.id),
            title: event.title.clone(),
            category: event.category.into(),
            date: format_long_date(event.date),
            location: event.location.clone(),
            price: format_inr(event.price),
            organizer: format!("By {}", event.organizer),
            image_url: event.image_url.clone(),
            image_hint: event.image_hint.clone(),
        }
    }
}

/// Event detail page.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventDetailView {
    /// Event identifier.
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Category badge.
    pub category: Badge,
    /// Date and time line (`Thu Aug 15 2024 at 4:00 PM`).
    pub date_time: String,
    /// Venue.
    pub location: String,
    /// Organizer name.
    pub organizer: String,
    /// Price per ticket (`₹150`).
    pub price: String,
    /// Suffix shown after the price.
    pub price_suffix: &'static str,
    /// Cover image URL.
    pub image_url: String,
    /// Short hint describing the image content.
    pub image_hint: String,
    /// Quantities offered by the booking dialog.
    pub ticket_options: Vec<u8>,
}

impl From<&Event> for EventDetailView {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            category: event.category.into(),
            date_time: format!("{} at {}", format_detail_date(event.date), event.time),
            location: event.location.clone(),
            organizer: event.organizer.clone(),
            price: format_inr(event.price),
            price_suffix: " / ticket",
            image_url: event.image_url.clone(),
            image_hint: event.image_hint.clone(),
            ticket_options: TicketQuantity::OPTIONS.to_vec(),
        }
    }
}

/// Options for the listing filter controls.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FilterOptionsView {
    /// Category choices.
    pub categories: Vec<&'static str>,
    /// Venue choices.
    pub locations: Vec<String>,
}

impl FilterOptionsView {
    /// Builds the options from the catalog's venues.
    #[must_use]
    pub fn new(locations: Vec<String>) -> Self {
        Self {
            categories: Category::ALL.iter().map(|c| c.as_str()).collect(),
            locations,
        }
    }
}
