//! AI event recommendations.
//!
//! The [`RecommendationService`] validates free-text preferences, renders
//! them into a fixed prompt together with the user's profile and booking
//! history, and asks a hosted [`LanguageModel`] for suggestions. The
//! [`RecommendationForm`] drives the service the way the dashboard form
//! does, including its single-flight submit guard.

pub mod form;
pub mod model;
pub mod prompt;
pub mod request;
pub mod service;

pub use form::{FormError, FormState, FormView, RecommendationForm};
pub use model::{ChatCompletionsModel, LanguageModel, ModelError};
pub use prompt::{Prompt, render_prompt};
pub use request::{
    MIN_PREFERENCES_CHARS, RecommendationRequest, RecommendationResponse, ValidationError,
};
pub use service::{GENERIC_FAILURE_MESSAGE, RecommendationError, RecommendationService};
