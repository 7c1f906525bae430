//! Recommendation request body.

use serde::Deserialize;
use utoipa::ToSchema;

/// `POST /recommendations` body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecommendationBody {
    /// Free-text description of what the user is looking for.
    #[serde(default)]
    pub preferences: String,
}
