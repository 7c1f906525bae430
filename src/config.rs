//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Unset or unparsable values fall back to
//! the defaults listed on each field.

use std::net::SocketAddr;
use std::time::Duration;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, multi-line.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Connection settings for the hosted language model.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible API (`LLM_ENDPOINT`).
    pub endpoint: String,
    /// Model name sent with each request (`LLM_MODEL`).
    pub model: String,
    /// Bearer token (`LLM_API_KEY`), omitted when unset.
    pub api_key: Option<String>,
    /// Sampling temperature (`LLM_TEMPERATURE`).
    pub temperature: f32,
    /// Completion length cap (`LLM_MAX_TOKENS`).
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:1234/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`AppConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind the HTTP server to (`LISTEN_ADDR`, default
    /// `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Language model connection.
    pub llm: LlmConfig,

    /// Number of event cards on the dashboard (`FEATURED_EVENT_COUNT`).
    pub featured_event_count: usize,

    /// Idle time after which an abandoned booking dialog is evicted
    /// (`DIALOG_IDLE_TTL_SECS`, default 1800).
    pub dialog_idle_ttl: Duration,

    /// Log output format (`LOG_FORMAT=json` or `pretty`).
    pub log_format: LogFormat,

    /// Whether `/swagger-ui` is mounted (`SWAGGER_UI_ENABLED`). Only takes
    /// effect when built with the `swagger-ui` feature.
    pub swagger_ui: bool,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()?;

        let defaults = LlmConfig::default();
        let llm = LlmConfig {
            endpoint: lookup("LLM_ENDPOINT").unwrap_or(defaults.endpoint),
            model: lookup("LLM_MODEL").unwrap_or(defaults.model),
            api_key: lookup("LLM_API_KEY").filter(|key| !key.trim().is_empty()),
            temperature: parse_env(&lookup, "LLM_TEMPERATURE", defaults.temperature),
            max_tokens: parse_env(&lookup, "LLM_MAX_TOKENS", defaults.max_tokens),
        };

        let featured_event_count = parse_env(&lookup, "FEATURED_EVENT_COUNT", 3);
        let dialog_idle_ttl =
            Duration::from_secs(parse_env(&lookup, "DIALOG_IDLE_TTL_SECS", 1800));

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let swagger_ui = parse_env_bool(&lookup, "SWAGGER_UI_ENABLED", true);

        Ok(Self {
            listen_addr,
            llm,
            featured_event_count,
            dialog_idle_ttl,
            log_format,
            swagger_ui,
        })
    }
}

/// Parses a variable as `T`, returning `default` on missing or invalid
/// values.
fn parse_env<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Parses a variable as a boolean. Accepts `"true"`, `"1"`, `"false"`,
/// `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true" | "1") => true,
        Some("false" | "0") => false,
        _ => default,
    }
}
