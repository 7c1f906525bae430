//! Badge styling for statuses, roles and categories.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{BookingStatus, Category, Role};

/// Visual variant of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Green, for confirmed bookings.
    Success,
    /// Muted colour.
    Secondary,
    /// Red, for cancellations and admins.
    Destructive,
    /// Border only, for categories.
    Outline,
}

/// A label rendered as a badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Badge {
    /// Badge text.
    pub label: &'static str,
    /// Badge style.
    pub variant: BadgeVariant,
}

impl From<BookingStatus> for Badge {
    fn from(status: BookingStatus) -> Self {
        let variant = match status {
            BookingStatus::Confirmed => BadgeVariant::Success,
            BookingStatus::Pending => BadgeVariant::Secondary,
            BookingStatus::Cancelled => BadgeVariant::Destructive,
        };
        Self {
            label: status.as_str(),
            variant,
        }
    }
}

impl From<Role> for Badge {
    fn from(role: Role) -> Self {
        let variant = match role {
            Role::Admin => BadgeVariant::Destructive,
            Role::User | Role::Organizer => BadgeVariant::Secondary,
        };
        Self {
            label: role.as_str(),
            variant,
        }
    }
}

impl From<Category> for Badge {
    fn from(category: Category) -> Self {
        Self {
            label: category.as_str(),
            variant: BadgeVariant::Outline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_status_badges() {
        assert_eq!(Badge::from(BookingStatus::Confirmed).variant, BadgeVariant::Success);
        assert_eq!(Badge::from(BookingStatus::Pending).variant, BadgeVariant::Secondary);
        assert_eq!(
            Badge::from(BookingStatus::Cancelled).variant,
            BadgeVariant::Destructive
        );
    }

    #[test]
    fn only_admins_get_the_destructive_role_badge() {
        assert_eq!(Badge::from(Role::Admin).variant, BadgeVariant::Destructive);
        assert_eq!(Badge::from(Role::Organizer).variant, BadgeVariant::Secondary);
        assert_eq!(Badge::from(Role::User).label, "User");
    }
}
