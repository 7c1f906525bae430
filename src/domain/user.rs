//! Registered users, displayed read-only in the admin panel.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserId;

/// Role of a user on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    /// Attendee.
    User,
    /// Creates and runs events.
    Organizer,
    /// Platform administrator.
    Admin,
}

impl Role {
    /// All roles in display order.
    pub const ALL: [Self; 3] = [Self::User, Self::Organizer, Self::Admin];

    /// Display name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Organizer => "Organizer",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Platform role.
    pub role: Role,
    /// Day the user registered.
    pub joined_date: NaiveDate,
}
