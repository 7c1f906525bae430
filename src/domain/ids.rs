//! Typed identifiers.
//!
//! Seed records are keyed by short strings (`"1"`, `"2"`, ...). Each record
//! kind gets its own newtype so an event id cannot be passed where a
//! booking id is expected. Booking dialog sessions are keyed by a random
//! UUID minted when the dialog opens.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

record_id!(
    /// Identifier of an [`super::Event`].
    EventId
);
record_id!(
    /// Identifier of a [`super::Booking`].
    BookingId
);
record_id!(
    /// Identifier of a [`super::User`].
    UserId
);

/// Key of an open booking dialog in [`super::DialogRegistry`], also the
/// `{id}` segment of the dialog endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct DialogId(uuid::Uuid);

impl DialogId {
    /// Mints a fresh random session key.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Wraps the UUID taken from a request path.
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Default for DialogId {
    fn default() -> Self {
        Self::new()
    }
}
