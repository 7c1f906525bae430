//! Event listing filters.

use chrono::NaiveDate;

use crate::domain::{Category, Event};

/// Criteria applied by [`super::Catalog::list_events`]. Every unset field
/// matches all events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Case-insensitive substring of title, category or location.
    pub keyword: Option<String>,
    /// Exact category.
    pub category: Option<Category>,
    /// Venue name, compared case-insensitively.
    pub location: Option<String>,
    /// Exact event day.
    pub date: Option<NaiveDate>,
}

impl EventFilter {
    /// Filter that matches every event.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Returns `true` if `event` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_keyword(event)
            && self.category.is_none_or(|c| c == event.category)
            && self
                .location
                .as_deref()
                .is_none_or(|l| l.trim().eq_ignore_ascii_case(&event.location))
            && self.date.is_none_or(|d| d == event.date)
    }

    fn matches_keyword(&self, event: &Event) -> bool {
        let Some(keyword) = self.keyword.as_deref().map(str::trim) else {
            return true;
        };
        if keyword.is_empty() {
            return true;
        }
        let needle = keyword.to_lowercase();
        [event.title.as_str(), event.category.as_str(), event.location.as_str()]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::domain::EventId;

    fn ids(filter: &EventFilter) -> Vec<String> {
        seed::events()
            .iter()
            .filter(|e| filter.matches(e))
            .map(|e| e.id.to_string())
            .collect()
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert_eq!(ids(&EventFilter::all()).len(), seed::events().len());
    }

    #[test]
    fn blank_keyword_is_ignored() {
        let filter = EventFilter {
            keyword: Some("   ".to_string()),
            ..EventFilter::default()
        };
        assert_eq!(ids(&filter).len(), seed::events().len());
    }

    #[test]
    fn keyword_searches_title_category_and_location() {
        let by_title = EventFilter {
            keyword: Some("JAZZ".to_string()),
            ..EventFilter::default()
        };
        assert_eq!(ids(&by_title), vec!["7"]);

        let by_location = EventFilter {
            keyword: Some("evergreen".to_string()),
            ..EventFilter::default()
        };
        assert_eq!(ids(&by_location), vec!["6"]);

        let by_category = EventFilter {
            keyword: Some("wellness".to_string()),
            ..EventFilter::default()
        };
        assert_eq!(ids(&by_category), vec!["6"]);
    }

    #[test]
    fn criteria_combine() {
        let filter = EventFilter {
            category: Some(Category::Music),
            location: Some("sunset valley".to_string()),
            ..EventFilter::default()
        };
        assert_eq!(ids(&filter), vec!["1", "7"]);

        let Some(date) = NaiveDate::from_ymd_opt(2024, 8, 31) else {
            panic!("valid date");
        };
        let narrowed = EventFilter {
            date: Some(date),
            ..filter
        };
        let matched: Vec<EventId> = seed::events()
            .into_iter()
            .filter(|e| narrowed.matches(e))
            .map(|e| e.id)
            .collect();
        assert_eq!(matched, vec![EventId::from("7")]);
    }
}
