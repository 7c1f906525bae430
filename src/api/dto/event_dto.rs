//! Event listing query and response.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::catalog::EventFilter;
use crate::domain::Category;
use crate::error::AppError;
use crate::view::{EventCardView, FilterOptionsView};

/// Query parameters for `GET /events`. Blank values are ignored.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventListParams {
    /// Case-insensitive search over title, category and venue.
    #[serde(default)]
    pub keyword: Option<String>,
    /// Category name, e.g. `Music`.
    #[serde(default)]
    pub category: Option<String>,
    /// Exact venue name.
    #[serde(default)]
    pub location: Option<String>,
    /// Event day as `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
}

impl EventListParams {
    /// Converts the raw query into an [`EventFilter`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unknown category or a
    /// malformed date.
    pub fn to_filter(&self) -> Result<EventFilter, AppError> {
        let category = non_blank(self.category.as_deref())
            .map(|c| {
                c.parse::<Category>().map_err(|e| AppError::Validation {
                    field: "category",
                    message: e.to_string(),
                })
            })
            .transpose()?;
        let date = non_blank(self.date.as_deref())
            .map(|d| {
                chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|_| {
                    AppError::Validation {
                        field: "date",
                        message: format!("expected a date as YYYY-MM-DD, got {d:?}"),
                    }
                })
            })
            .transpose()?;
        Ok(EventFilter {
            keyword: non_blank(self.keyword.as_deref()).map(str::to_string),
            category,
            location: non_blank(self.location.as_deref()).map(str::to_string),
            date,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// `GET /events` body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventListResponse {
    /// Matching events.
    pub data: Vec<EventCardView>,
    /// Number of matches.
    pub total: usize,
    /// Choices for the filter controls.
    pub filters: FilterOptionsView,
}
