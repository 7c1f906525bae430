//! AI recommendation handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::RecommendationBody;
use crate::api::extract::ApiJson;
use crate::app_state::AppState;
use crate::error::{AppError, ErrorResponse};
use crate::recommendation::{FormState, FormView, RecommendationForm};

/// `POST /recommendations`: Submit the recommendation form.
///
/// Every request drives its own fresh [`RecommendationForm`], so concurrent
/// requests never block each other. The form's single-flight guard only
/// applies to callers that keep one form across submissions.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the preferences are shorter than
/// ten characters (the model is not called),
/// [`AppError::InvalidRequest`] for a malformed body and
/// [`AppError::RecommendationUnavailable`] with the generic message when
/// the model call fails.
#[utoipa::path(
    post,
    path = "/api/v1/recommendations",
    tag = "Recommendations",
    summary = "Generate recommendations",
    description = "Sends the preferences, together with the user's profile and booking history, to the language model and returns the rendered result card.",
    request_body = RecommendationBody,
    responses(
        (status = 200, description = "Recommendations generated", body = FormView),
        (status = 400, description = "Preferences too short or malformed body", body = ErrorResponse),
        (status = 502, description = "Model call failed", body = ErrorResponse),
    )
)]
pub async fn recommend(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RecommendationBody>,
) -> Result<impl IntoResponse, AppError> {
    let mut form = RecommendationForm::new();
    form.submit(&state.recommendations, &body.preferences)
        .await?;

    if let FormState::Error(message) = form.state() {
        return Err(AppError::RecommendationUnavailable(message.clone()));
    }
    Ok(Json(form.view()))
}

/// Recommendation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/recommendations", post(recommend))
}
