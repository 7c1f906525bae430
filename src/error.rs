//! Application error types with HTTP status code mapping.
//!
//! [`AppError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::CatalogError;
use crate::domain::booking_dialog::DialogError;
use crate::domain::{BookingId, DialogId, EventId, UserId};
use crate::recommendation::FormError;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "event not found: 42",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details (e.g. the offending field).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category          | HTTP Status                  |
/// |-----------|-------------------|------------------------------|
/// | 1000–1999 | Validation        | 400 Bad Request              |
/// | 2000–2999 | Not Found / State | 404 Not Found / 409 Conflict |
/// | 3000–3999 | Server / Upstream | 500 / 502                    |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A request field failed validation.
    #[error("{message}")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
        /// Field-level message shown next to the input.
        message: String,
    },

    /// Malformed request that is not tied to a single field.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Event with the given ID was not found.
    #[error("event not found: {0}")]
    EventNotFound(EventId),

    /// Booking with the given ID was not found.
    #[error("booking not found: {0}")]
    BookingNotFound(BookingId),

    /// User with the given ID was not found.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// Booking dialog session with the given ID was not found.
    #[error("booking dialog not found: {0}")]
    DialogNotFound(DialogId),

    /// The booking dialog cannot perform the command in its current step.
    #[error("{0}")]
    DialogConflict(String),

    /// The recommendation model failed; carries the generic user-facing text.
    #[error("{0}")]
    RecommendationUnavailable(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation { .. } => 1001,
            Self::InvalidRequest(_) => 1002,
            Self::EventNotFound(_) => 2001,
            Self::BookingNotFound(_) => 2002,
            Self::UserNotFound(_) => 2003,
            Self::DialogNotFound(_) => 2004,
            Self::DialogConflict(_) => 2101,
            Self::Internal(_) => 3000,
            Self::RecommendationUnavailable(_) => 3101,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::EventNotFound(_)
            | Self::BookingNotFound(_)
            | Self::UserNotFound(_)
            | Self::DialogNotFound(_) => StatusCode::NOT_FOUND,
            Self::DialogConflict(_) => StatusCode::CONFLICT,
            Self::RecommendationUnavailable(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            Self::Validation { field, .. } => Some((*field).to_string()),
            _ => None,
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::EventNotFound(id) => Self::EventNotFound(id),
            CatalogError::BookingNotFound(id) => Self::BookingNotFound(id),
            CatalogError::UserNotFound(id) => Self::UserNotFound(id),
            CatalogError::DuplicateId { .. } => Self::Internal(err.to_string()),
        }
    }
}

impl From<DialogError> for AppError {
    fn from(err: DialogError) -> Self {
        match err {
            DialogError::InvalidQuantity(_) => Self::Validation {
                field: "quantity",
                message: err.to_string(),
            },
            DialogError::InvalidTransition { .. } | DialogError::Closed => {
                Self::DialogConflict(err.to_string())
            }
        }
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Invalid(v) => Self::Validation {
                field: "preferences",
                message: v.to_string(),
            },
            FormError::InFlight => Self::InvalidRequest(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: self.details(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::{GENERIC_FAILURE_MESSAGE, ValidationError};

    #[test]
    fn not_found_variants_map_to_404() {
        let err = AppError::EventNotFound(EventId::from("99"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), 2001);
        assert_eq!(err.to_string(), "event not found: 99");
    }

    #[test]
    fn short_preferences_map_to_field_error() {
        let err = AppError::from(FormError::Invalid(ValidationError::PreferencesTooShort));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.details().as_deref(), Some("preferences"));
        assert_eq!(
            err.to_string(),
            "Please describe your preferences in at least 10 characters."
        );
    }

    #[test]
    fn model_failure_keeps_generic_message() {
        let err = AppError::RecommendationUnavailable(GENERIC_FAILURE_MESSAGE.to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn dialog_misuse_is_conflict() {
        let err = AppError::from(DialogError::Closed);
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }
}
