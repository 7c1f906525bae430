//! Hosted language model client.
//!
//! [`LanguageModel`] is the seam between the recommendation service and the
//! model provider. [`ChatCompletionsModel`] talks to any endpoint that speaks
//! the OpenAI `/chat/completions` protocol.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use super::prompt::Prompt;
use crate::config::LlmConfig;

/// Failures talking to the model provider.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Transport-level failure (connection refused, DNS, TLS, ...).
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The provider answered with a non-success status.
    #[error("api error (status {status}): {message}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The response body was not the expected JSON.
    #[error("response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// The model returned no text.
    #[error("model returned an empty completion")]
    EmptyCompletion,
}

/// Text completion backend.
#[async_trait]
pub trait LanguageModel: Send + Sync + std::fmt::Debug {
    /// Sends `prompt` and returns the raw completion text.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] on transport, status or parsing failures.
    async fn complete(&self, prompt: &Prompt) -> Result<String, ModelError>;
}

/// Client for an OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone)]
pub struct ChatCompletionsModel {
    client: Client,
    config: LlmConfig,
}

impl ChatCompletionsModel {
    /// Creates a client for the configured endpoint.
    #[must_use]
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl LanguageModel for ChatCompletionsModel {
    async fn complete(&self, prompt: &Prompt) -> Result<String, ModelError> {
        let payload = json!({
            "model": self.config.model,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
            "messages": [
                { "role": "system", "content": prompt.system },
                { "role": "user", "content": prompt.user },
            ],
        });

        let mut request = self.client.post(self.url()).json(&payload);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ModelError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ModelError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(ModelError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| ModelError::ResponseParseFailed(e.to_string()))?;

        let content = value
            .get("choices")
            .and_then(|choices| choices.as_array())
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| {
                ModelError::ResponseParseFailed("response missing message content".to_string())
            })?;

        let text = content.trim();
        if text.is_empty() {
            return Err(ModelError::EmptyCompletion);
        }
        Ok(text.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn model_for(server: &MockServer, api_key: Option<&str>) -> ChatCompletionsModel {
        ChatCompletionsModel::new(LlmConfig {
            endpoint: format!("{}/v1/", server.uri()),
            model: "test-model".to_string(),
            api_key: api_key.map(str::to_string),
            temperature: 0.5,
            max_tokens: 256,
        })
    }

    fn prompt() -> Prompt {
        Prompt {
            system: "sys".to_string(),
            user: "Preferences: jazz".to_string(),
        }
    }

    #[tokio::test]
    async fn returns_trimmed_message_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer secret"))
            .and(body_partial_json(json!({
                "model": "test-model",
                "messages": [
                    { "role": "system", "content": "sys" },
                    { "role": "user", "content": "Preferences: jazz" },
                ],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "  A\nB \n" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = model_for(&server, Some("secret")).complete(&prompt()).await;
        let Ok(text) = result else {
            panic!("expected completion, got {result:?}");
        };
        assert_eq!(text, "A\nB");
    }

    #[tokio::test]
    async fn non_success_status_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let result = model_for(&server, None).complete(&prompt()).await;
        assert!(matches!(
            result,
            Err(ModelError::ApiError { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn missing_content_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let result = model_for(&server, None).complete(&prompt()).await;
        assert!(matches!(result, Err(ModelError::ResponseParseFailed(_))));
    }

    #[tokio::test]
    async fn blank_content_is_empty_completion() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "content": "   " } }]
            })))
            .mount(&server)
            .await;

        let result = model_for(&server, None).complete(&prompt()).await;
        assert!(matches!(result, Err(ModelError::EmptyCompletion)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_request_failure() {
        let model = ChatCompletionsModel::new(LlmConfig {
            endpoint: "http://127.0.0.1:9".to_string(),
            ..LlmConfig::default()
        });
        let result = model.complete(&prompt()).await;
        assert!(matches!(result, Err(ModelError::RequestFailed(_))));
    }
}
