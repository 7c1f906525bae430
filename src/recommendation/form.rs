//! Recommendation form controller.
//!
//! ```text
//! Idle ──submit(valid)──► Submitting ──ok──► Success(text)
//!  ▲                          │
//!  │                          └──fail──► Error(message)
//!  └─ submit(invalid): stays put, sets the field message
//!
//! Success | Error ──submit(valid)──► Submitting (prior result cleared)
//! ```

use serde::Serialize;
use utoipa::ToSchema;

use super::request::{RecommendationResponse, ValidationError, validate_preferences};
use super::service::{RecommendationError, RecommendationService};
use crate::view::format::text_to_html;

/// Heading rendered above a successful result.
pub const RESULT_HEADING: &str = "Here are your recommendations:";

/// Lifecycle of one form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight; the submit control is disabled.
    Submitting,
    /// The model answered.
    Success(String),
    /// The model call failed.
    Error(String),
}

impl FormState {
    /// Lowercase state name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }
}

/// Submissions the form refuses to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The preferences failed validation; the field message is set.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A request from this form is already in flight.
    #[error("a recommendation request is already in progress")]
    InFlight,
}

/// Client-side state of the recommendation form.
#[derive(Debug, Clone, Default)]
pub struct RecommendationForm {
    state: FormState,
    field_error: Option<String>,
}

impl RecommendationForm {
    /// Creates an idle form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Field-level validation message, if the last submit was invalid.
    #[must_use]
    pub fn field_error(&self) -> Option<&str> {
        self.field_error.as_deref()
    }

    /// Whether the submit control accepts clicks.
    #[must_use]
    pub const fn submit_enabled(&self) -> bool {
        !matches!(self.state, FormState::Submitting)
    }

    /// Validates `preferences` and enters `Submitting`, clearing any prior
    /// result or error.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InFlight`] while a request is outstanding and
    /// [`FormError::Invalid`] for short input; the state is left unchanged
    /// in both cases.
    pub fn begin(&mut self, preferences: &str) -> Result<(), FormError> {
        if !self.submit_enabled() {
            return Err(FormError::InFlight);
        }
        if let Err(err) = validate_preferences(preferences) {
            self.field_error = Some(err.to_string());
            return Err(err.into());
        }
        self.field_error = None;
        self.state = FormState::Submitting;
        Ok(())
    }

    /// Applies the outcome of the in-flight request. Ignored unless the
    /// form is `Submitting`.
    pub fn finish(&mut self, outcome: Result<RecommendationResponse, RecommendationError>) {
        if self.state != FormState::Submitting {
            return;
        }
        self.state = match outcome {
            Ok(response) => FormState::Success(response.recommendations),
            Err(RecommendationError::Validation(err)) => {
                self.field_error = Some(err.to_string());
                FormState::Idle
            }
            Err(err @ RecommendationError::Unavailable) => FormState::Error(err.to_string()),
        };
    }

    /// Runs a full submission against `service`.
    ///
    /// # Errors
    ///
    /// Returns the [`FormError`] from [`Self::begin`]; no request is sent in
    /// that case. Model failures are not errors here: they move the form to
    /// [`FormState::Error`].
    pub async fn submit(
        &mut self,
        service: &RecommendationService,
        preferences: &str,
    ) -> Result<(), FormError> {
        self.begin(preferences)?;
        let outcome = service.recommend(preferences).await;
        self.finish(outcome);
        Ok(())
    }

    /// Renders the current state.
    #[must_use]
    pub fn view(&self) -> FormView {
        let (alert, result) = match &self.state {
            FormState::Error(message) => (
                Some(AlertView {
                    title: "Error",
                    message: message.clone(),
                }),
                None,
            ),
            FormState::Success(text) => (None, Some(RecommendationView::new(text))),
            FormState::Idle | FormState::Submitting => (None, None),
        };
        FormView {
            status: self.state.name(),
            submit_enabled: self.submit_enabled(),
            field_error: self.field_error.clone(),
            alert,
            result,
        }
    }
}

/// Rendered form.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FormView {
    /// `idle`, `submitting`, `success` or `error`.
    pub status: &'static str,
    /// Whether the submit button is enabled.
    pub submit_enabled: bool,
    /// Message shown under the preferences field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_error: Option<String>,
    /// Destructive alert shown on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<AlertView>,
    /// Results card shown on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RecommendationView>,
}

/// Alert region contents.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AlertView {
    /// Alert title.
    pub title: &'static str,
    /// Alert body.
    pub message: String,
}

/// Results card contents.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecommendationView {
    /// Card heading.
    pub heading: &'static str,
    /// Text as returned by the model.
    pub recommendations: String,
    /// The text split into display lines.
    pub lines: Vec<String>,
    /// HTML-escaped text with newlines turned into `<br />`.
    pub html: String,
}

impl RecommendationView {
    fn new(text: &str) -> Self {
        Self {
            heading: RESULT_HEADING,
            recommendations: text.to_string(),
            lines: text.lines().map(str::to_string).collect(),
            html: text_to_html(text),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::recommendation::LanguageModel;
    use crate::recommendation::service::GENERIC_FAILURE_MESSAGE;
    use crate::recommendation::service::tests::ScriptedModel;

    fn service_with(model: &Arc<ScriptedModel>) -> RecommendationService {
        RecommendationService::new(Arc::clone(model) as Arc<dyn LanguageModel>)
    }

    #[tokio::test]
    async fn short_input_blocks_submission_and_shows_field_message() {
        let model = Arc::new(ScriptedModel::replying("unused"));
        let mut form = RecommendationForm::new();

        for short in ["", "jazz", "123456789"] {
            let result = form.submit(&service_with(&model), short).await;
            assert_eq!(
                result,
                Err(FormError::Invalid(ValidationError::PreferencesTooShort))
            );
            assert_eq!(form.state(), &FormState::Idle);
            assert_eq!(
                form.field_error(),
                Some("Please describe your preferences in at least 10 characters.")
            );
        }
        assert_eq!(model.calls(), 0);
    }

    #[test]
    fn submit_control_is_disabled_while_in_flight() {
        let mut form = RecommendationForm::new();
        assert!(form.submit_enabled());
        assert!(form.begin("live jazz music tonight").is_ok());
        assert_eq!(form.state(), &FormState::Submitting);
        assert!(!form.submit_enabled());
        assert!(!form.view().submit_enabled);

        assert_eq!(form.begin("another valid request"), Err(FormError::InFlight));
        assert_eq!(form.state(), &FormState::Submitting);

        form.finish(Ok(RecommendationResponse {
            recommendations: "done".to_string(),
        }));
        assert!(form.submit_enabled());
    }

    #[tokio::test]
    async fn success_renders_each_line_separately() {
        let model = Arc::new(ScriptedModel::replying(r#"{"recommendations": "A\nB"}"#));
        let mut form = RecommendationForm::new();

        let result = form.submit(&service_with(&model), "live jazz music in a cozy venue").await;
        assert!(result.is_ok());
        assert_eq!(form.state(), &FormState::Success("A\nB".to_string()));

        let view = form.view();
        assert_eq!(view.status, "success");
        assert!(view.alert.is_none());
        let Some(card) = view.result else {
            panic!("results card expected");
        };
        assert_eq!(card.lines, vec!["A", "B"]);
        assert_eq!(card.html, "A<br />B");
    }

    #[tokio::test]
    async fn failure_shows_only_the_generic_alert() {
        let model = Arc::new(ScriptedModel::failing());
        let mut form = RecommendationForm::new();

        let _ = form.submit(&service_with(&model), "tech workshops about Python").await;
        let view = form.view();
        assert_eq!(view.status, "error");
        assert!(view.result.is_none());
        let Some(alert) = view.alert else {
            panic!("alert expected");
        };
        assert_eq!(alert.message, GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn resubmission_clears_previous_result() {
        let ok = Arc::new(ScriptedModel::replying("Jazz night"));
        let failing = Arc::new(ScriptedModel::failing());
        let mut form = RecommendationForm::new();

        let _ = form.submit(&service_with(&ok), "live jazz music tonight").await;
        assert!(matches!(form.state(), FormState::Success(_)));

        assert!(form.begin("outdoor food festivals").is_ok());
        assert!(form.view().result.is_none());
        form.finish(Err(RecommendationError::Unavailable));
        assert!(form.view().result.is_none());

        let _ = form.submit(&service_with(&failing), "outdoor food festivals").await;
        assert_eq!(
            form.state(),
            &FormState::Error(GENERIC_FAILURE_MESSAGE.to_string())
        );
        let _ = form.submit(&service_with(&ok), "live jazz music tonight").await;
        assert!(form.view().alert.is_none());
    }

    #[test]
    fn invalid_resubmission_keeps_prior_result() {
        let mut form = RecommendationForm::new();
        let _ = form.begin("live jazz music tonight");
        form.finish(Ok(RecommendationResponse {
            recommendations: "Jazz night".to_string(),
        }));

        assert!(form.begin("short").is_err());
        assert_eq!(form.state(), &FormState::Success("Jazz night".to_string()));
        assert!(form.field_error().is_some());
    }

    #[test]
    fn html_escapes_model_output() {
        let view = RecommendationView::new("<b>Gala</b> & more\nNext");
        assert_eq!(view.html, "&lt;b&gt;Gala&lt;/b&gt; &amp; more<br />Next");
    }
}
