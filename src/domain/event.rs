//! Bookable events and their pricing.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use super::EventId;

/// Event category shown as a badge and used by the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    /// Concerts and festivals.
    Music,
    /// Conferences, meetups, workshops.
    Tech,
    /// Food festivals and tastings.
    Food,
    /// Exhibitions and galleries.
    Art,
    /// Races, matches, tournaments.
    Sports,
    /// Yoga, retreats, meditation.
    Wellness,
}

impl Category {
    /// All categories in filter-menu order.
    pub const ALL: [Self; 6] = [
        Self::Music,
        Self::Tech,
        Self::Food,
        Self::Art,
        Self::Sports,
        Self::Wellness,
    ];

    /// Display name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Music => "Music",
            Self::Tech => "Tech",
            Self::Food => "Food",
            Self::Art => "Art",
            Self::Sports => "Sports",
            Self::Wellness => "Wellness",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a category string does not name a known [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parses a category name case-insensitively (`"music"`, `"Music"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Non-negative ticket price stored in minor currency units (paise).
///
/// Serialized as a JSON number of major units: `150` for ₹150,
/// `99.5` for ₹99.50.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    /// Creates a price from whole currency units.
    #[must_use]
    pub const fn from_major(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Creates a price from minor currency units.
    #[must_use]
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn minor(self) -> u64 {
        self.0
    }

    /// Whole-unit part of the amount.
    #[must_use]
    pub const fn major_part(self) -> u64 {
        self.0 / 100
    }

    /// Fractional part of the amount in minor units (`0..100`).
    #[must_use]
    pub const fn minor_part(self) -> u64 {
        self.0 % 100
    }

    /// Price of `quantity` tickets at this unit price.
    #[must_use]
    pub const fn times(self, quantity: u64) -> Self {
        Self(self.0.saturating_mul(quantity))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.minor_part() == 0 {
            serializer.serialize_u64(self.major_part())
        } else {
            #[allow(clippy::cast_precision_loss)]
            let major = self.0 as f64 / 100.0;
            serializer.serialize_f64(major)
        }
    }
}

/// A bookable activity with schedule, location, price, and category.
///
/// Loaded once from seed data and never mutated.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Calendar day the event takes place.
    pub date: NaiveDate,
    /// Start time as displayed (e.g. `"7:00 PM"`).
    pub time: String,
    /// Venue name.
    pub location: String,
    /// Event category.
    pub category: Category,
    /// Organizer display name.
    pub organizer: String,
    /// Price per ticket.
    #[schema(value_type = f64)]
    pub price: Price,
    /// Cover image URL.
    pub image_url: String,
    /// Short hint describing the image content.
    pub image_hint: String,
}
