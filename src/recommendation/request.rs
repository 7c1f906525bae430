//! Request and response contract of the recommendation service.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minimum number of characters in the preferences text.
pub const MIN_PREFERENCES_CHARS: usize = 10;

/// Input rejected before any model call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Preferences shorter than [`MIN_PREFERENCES_CHARS`].
    #[error("Please describe your preferences in at least 10 characters.")]
    PreferencesTooShort,
}

/// Checks the preferences text.
///
/// Length is the raw character count; surrounding whitespace counts.
///
/// # Errors
///
/// Returns [`ValidationError::PreferencesTooShort`] for fewer than
/// [`MIN_PREFERENCES_CHARS`] characters.
pub fn validate_preferences(preferences: &str) -> Result<(), ValidationError> {
    if preferences.chars().count() < MIN_PREFERENCES_CHARS {
        Err(ValidationError::PreferencesTooShort)
    } else {
        Ok(())
    }
}

/// Validated input to the recommendation prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    user_profile: String,
    past_bookings: String,
    preferences: String,
}

impl RecommendationRequest {
    /// Builds a request, validating the preferences.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `preferences` is too short.
    pub fn new(
        user_profile: impl Into<String>,
        past_bookings: impl Into<String>,
        preferences: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let preferences = preferences.into();
        validate_preferences(&preferences)?;
        Ok(Self {
            user_profile: user_profile.into(),
            past_bookings: past_bookings.into(),
            preferences,
        })
    }

    /// Demographics and interests of the user.
    #[must_use]
    pub fn user_profile(&self) -> &str {
        &self.user_profile
    }

    /// Summary of events the user booked before.
    #[must_use]
    pub fn past_bookings(&self) -> &str {
        &self.past_bookings
    }

    /// Free-text preferences typed by the user.
    #[must_use]
    pub fn preferences(&self) -> &str {
        &self.preferences
    }
}

/// Model output: free-text recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResponse {
    /// Generated recommendations, one or more lines.
    pub recommendations: String,
}
