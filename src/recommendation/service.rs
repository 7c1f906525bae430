//! Recommendation service: validate, render prompt, call the model.

use std::sync::Arc;

use super::model::LanguageModel;
use super::prompt::render_prompt;
use super::request::{RecommendationRequest, RecommendationResponse, ValidationError};

/// Profile sent with every request until real user sessions exist.
pub const DEFAULT_USER_PROFILE: &str = "28-year-old software developer living in San Francisco, \
enjoys live music, technology conferences, and outdoor activities.";

/// Booking history sent with every request until real user sessions exist.
pub const DEFAULT_PAST_BOOKINGS: &str = "Attended 'Indie Music Fest' last summer, \
booked tickets for 'AI in Tech Summit 2023'.";

/// Message shown for any model failure.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to generate recommendations. Please try again later.";

/// Errors surfaced to callers of [`RecommendationService::recommend`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecommendationError {
    /// Input was rejected before the model was called.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The model call failed. The cause is logged, not returned.
    #[error("Failed to generate recommendations. Please try again later.")]
    Unavailable,
}

/// Turns free-text preferences into model-generated recommendations.
///
/// Each call makes exactly one model request: no retry, no timeout, no
/// partial results.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    model: Arc<dyn LanguageModel>,
    user_profile: String,
    past_bookings: String,
}

impl RecommendationService {
    /// Creates a service using the built-in profile and booking history.
    #[must_use]
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            model,
            user_profile: DEFAULT_USER_PROFILE.to_string(),
            past_bookings: DEFAULT_PAST_BOOKINGS.to_string(),
        }
    }

    /// Generates recommendations for `preferences`.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendationError::Validation`] for preferences shorter
    /// than ten characters (no request is sent), and
    /// [`RecommendationError::Unavailable`] for any model failure.
    pub async fn recommend(
        &self,
        preferences: &str,
    ) -> Result<RecommendationResponse, RecommendationError> {
        let request =
            RecommendationRequest::new(&*self.user_profile, &*self.past_bookings, preferences)?;
        let prompt = render_prompt(&request);

        match self.model.complete(&prompt).await {
            Ok(text) => match parse_reply(&text) {
                Some(response) => {
                    tracing::info!(
                        chars = response.recommendations.len(),
                        "recommendations generated"
                    );
                    Ok(response)
                }
                None => {
                    tracing::error!("AI recommendation error: empty recommendations");
                    Err(RecommendationError::Unavailable)
                }
            },
            Err(err) => {
                tracing::error!(error = %err, "AI recommendation error");
                Err(RecommendationError::Unavailable)
            }
        }
    }
}

/// Extracts the structured reply. Falls back to the raw text when the model
/// ignored the JSON instruction. Returns `None` if nothing usable remains.
fn parse_reply(text: &str) -> Option<RecommendationResponse> {
    let body = strip_code_fence(text.trim());
    let recommendations = match serde_json::from_str::<RecommendationResponse>(body) {
        Ok(parsed) => parsed.recommendations,
        Err(_) => body.to_string(),
    };
    let recommendations = recommendations.trim();
    if recommendations.is_empty() {
        None
    } else {
        Some(RecommendationResponse {
            recommendations: recommendations.to_string(),
        })
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
#[allow(clippy::panic)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::recommendation::model::ModelError;
    use crate::recommendation::prompt::Prompt;

    /// Scripted model recording every prompt it receives.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedModel {
        reply: Option<String>,
        pub(crate) prompts: Mutex<Vec<Prompt>>,
    }

    impl ScriptedModel {
        pub(crate) fn replying(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                prompts: Mutex::default(),
            }
        }

        pub(crate) fn failing() -> Self {
            Self::default()
        }

        pub(crate) fn calls(&self) -> usize {
            self.prompts.lock().map(|p| p.len()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl LanguageModel for ScriptedModel {
        async fn complete(&self, prompt: &Prompt) -> Result<String, ModelError> {
            if let Ok(mut prompts) = self.prompts.lock() {
                prompts.push(prompt.clone());
            }
            self.reply
                .clone()
                .ok_or_else(|| ModelError::RequestFailed("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn sends_fixed_profile_and_preferences() {
        let model = Arc::new(ScriptedModel::replying(
            r#"{"recommendations": "Jazz Under the Stars"}"#,
        ));
        let service = RecommendationService::new(Arc::clone(&model) as Arc<dyn LanguageModel>);

        let result = service
            .recommend("live jazz music in a cozy venue this weekend")
            .await;
        assert_eq!(
            result.ok().map(|r| r.recommendations).as_deref(),
            Some("Jazz Under the Stars")
        );

        let Ok(prompts) = model.prompts.lock() else {
            panic!("lock poisoned");
        };
        let Some(sent) = prompts.first() else {
            panic!("one prompt sent");
        };
        assert!(sent.user.contains(DEFAULT_USER_PROFILE));
        assert!(sent.user.contains(DEFAULT_PAST_BOOKINGS));
        assert!(sent.user.contains("Preferences: live jazz music in a cozy venue this weekend"));
    }

    #[tokio::test]
    async fn short_preferences_never_reach_the_model() {
        let model = Arc::new(ScriptedModel::replying("unused"));
        let service = RecommendationService::new(Arc::clone(&model) as Arc<dyn LanguageModel>);

        let result = service.recommend("jazz").await;
        assert_eq!(
            result.err(),
            Some(RecommendationError::Validation(
                ValidationError::PreferencesTooShort
            ))
        );
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn model_failure_maps_to_generic_message() {
        let model = Arc::new(ScriptedModel::failing());
        let service = RecommendationService::new(Arc::clone(&model) as Arc<dyn LanguageModel>);

        let result = service.recommend("tech workshops about Python").await;
        let Err(err) = result else {
            panic!("model failure must surface");
        };
        assert_eq!(err, RecommendationError::Unavailable);
        assert_eq!(err.to_string(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(model.calls(), 1);
    }

    #[test]
    fn parse_reply_accepts_json_fenced_and_plain_text() {
        let fenced = "```json\n{\"recommendations\": \"A\\nB\"}\n```";
        assert_eq!(
            parse_reply(fenced).map(|r| r.recommendations).as_deref(),
            Some("A\nB")
        );
        assert_eq!(
            parse_reply("1. Jazz night\n2. Food fair")
                .map(|r| r.recommendations)
                .as_deref(),
            Some("1. Jazz night\n2. Food fair")
        );
        assert_eq!(parse_reply(r#"{"recommendations": "  "}"#), None);
    }
}
