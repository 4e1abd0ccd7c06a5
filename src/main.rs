//! Taro Holistico server binary.
//!
//! Loads configuration from the environment, wires the completion provider
//! into the consultation handler, and serves the HTTP API.

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use taro_holistico::adapters::ai::{OpenAiConfig, OpenAiProvider};
use taro_holistico::adapters::http::{consultation_routes, index, ConsultationHandlers};
use taro_holistico::application::handlers::consultation::GenerateReadingHandler;
use taro_holistico::config::AppConfig;
use taro_holistico::ports::CompletionProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    // Without a credential the endpoint answers a configuration error per
    // request instead of refusing to start.
    let provider: Option<Arc<dyn CompletionProvider>> = match &config.ai.openai_api_key {
        Some(key) if !key.is_empty() => {
            let provider_config = OpenAiConfig::new(key.clone())
                .with_model(config.ai.model.clone())
                .with_base_url(config.ai.base_url.clone());
            Some(Arc::new(OpenAiProvider::new(provider_config)))
        }
        _ => {
            tracing::warn!("no API credential configured; /api/consulta will report a server error");
            None
        }
    };

    let handlers = ConsultationHandlers::new(Arc::new(GenerateReadingHandler::new(provider)));

    let cors = match config.server.cors_origins_list() {
        origins if origins.is_empty() => CorsLayer::permissive(),
        origins => {
            let origins: Vec<HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let app = Router::new()
        .route("/", get(index))
        .nest("/api", consultation_routes(handlers))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
