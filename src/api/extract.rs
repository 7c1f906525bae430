//! Custom Axum extractors.
//!
//! - `ApiJson`: JSON request body whose rejections use the API error shape

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body.
///
/// Behaves like [`axum::Json`], but a missing content type, malformed JSON or
/// a body of the wrong shape is rejected with [`AppError::InvalidRequest`]
/// instead of axum's plain-text response.
///
/// ```ignore
/// async fn handler(ApiJson(body): ApiJson<QuantityRequest>) -> Result<Json<View>, AppError> {
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::body::Body;
    use axum::http::StatusCode;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Counter {
        count: i64,
    }

    async fn extract(
        content_type: Option<&str>,
        body: &'static str,
    ) -> Result<ApiJson<Counter>, AppError> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let Ok(req) = builder.body(Body::from(body)) else {
            panic!("valid request");
        };
        ApiJson::from_request(req, &()).await
    }

    #[tokio::test]
    async fn accepts_well_formed_json() {
        let Ok(ApiJson(counter)) = extract(Some("application/json"), r#"{"count":3}"#).await else {
            panic!("body should parse");
        };
        assert_eq!(counter.count, 3);
    }

    #[tokio::test]
    async fn malformed_json_is_invalid_request() {
        let Err(err) = extract(Some("application/json"), "{count").await else {
            panic!("malformed body must be rejected");
        };
        assert!(matches!(err, AppError::InvalidRequest(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), 1002);
    }

    #[tokio::test]
    async fn missing_content_type_is_invalid_request() {
        let result = extract(None, r#"{"count":3}"#).await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn wrong_field_type_is_invalid_request() {
        let result = extract(Some("application/json"), r#"{"count":"three"}"#).await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }
}
