//! eventflow server entry point.
//!
//! Starts the Axum HTTP server with the REST endpoints.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use eventflow::api;
use eventflow::app_state::AppState;
use eventflow::catalog::StaticCatalog;
use eventflow::config::{AppConfig, LogFormat};
use eventflow::recommendation::{ChatCompletionsModel, RecommendationService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, model = %config.llm.model, "starting eventflow");

    // Build catalog and services
    let catalog = Arc::new(StaticCatalog::seeded()?);
    let model = Arc::new(ChatCompletionsModel::new(config.llm.clone()));
    let recommendations = RecommendationService::new(model);

    // Build application state
    let app_state = AppState::new(
        catalog,
        recommendations,
        config.featured_event_count,
        config.dialog_idle_ttl,
    );

    // Build router
    let router = Router::new().merge(api::build_router());
    #[cfg(feature = "swagger-ui")]
    let router = if config.swagger_ui {
        router.merge(api::swagger_ui())
    } else {
        router
    };
    let app = router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
