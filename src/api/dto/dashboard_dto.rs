//! Dashboard response.

use serde::Serialize;
use utoipa::ToSchema;

use crate::recommendation::MIN_PREFERENCES_CHARS;
use crate::view::EventCardView;

/// Static copy and limits of the recommendation form.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecommendationFormMeta {
    /// Card heading.
    pub title: &'static str,
    /// Card subheading.
    pub description: &'static str,
    /// Label of the preferences field.
    pub label: &'static str,
    /// Example text shown in the empty field.
    pub placeholder: &'static str,
    /// Submit button text.
    pub submit_label: &'static str,
    /// Minimum preference length, in characters.
    pub min_chars: usize,
    /// Endpoint the form posts to.
    pub action: &'static str,
}

impl Default for RecommendationFormMeta {
    fn default() -> Self {
        Self {
            title: "Event Recommendations",
            description: "Get personalized suggestions powered by AI.",
            label: "What are you looking for?",
            placeholder: "e.g., 'live jazz music in a cozy venue this weekend' or 'tech workshops about Python'",
            submit_label: "Generate Recommendations",
            min_chars: MIN_PREFERENCES_CHARS,
            action: "/api/v1/recommendations",
        }
    }
}

/// `GET /dashboard` body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardResponse {
    /// Page heading.
    pub title: &'static str,
    /// Page subheading.
    pub description: &'static str,
    /// First events of the catalog.
    pub featured_events: Vec<EventCardView>,
    /// Recommendation form copy.
    pub recommendation_form: RecommendationFormMeta,
}

impl DashboardResponse {
    /// Builds the dashboard around the featured cards.
    #[must_use]
    pub fn new(featured_events: Vec<EventCardView>) -> Self {
        Self {
            title: "Dashboard",
            description: "Welcome back! Here's an overview of what's happening.",
            featured_events,
            recommendation_form: RecommendationFormMeta::default(),
        }
    }
}
