mod config;
mod fetcher;
mod prompt;
mod routes;
mod synthesis;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::fetcher::Fetcher;
use crate::routes::AppState;
use crate::synthesis::SynthesisClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "centrist_news=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load("feeds.toml")?;
    info!(
        "Loaded feed groups '{}' ({} feeds) and '{}' ({} feeds)",
        config.left.label,
        config.left.urls.len(),
        config.right.label,
        config.right.urls.len()
    );

    // Credential default; the sidebar input can override it per request
    let default_api_key = std::env::var("GOOGLE_API_KEY").unwrap_or_default();
    if default_api_key.is_empty() {
        info!("GOOGLE_API_KEY not set; the key must be entered in the sidebar");
    }

    let synthesizer = SynthesisClient::new(
        config.synthesis.endpoint.clone(),
        config.synthesis.model.clone(),
    );
    let listen_addr = config.listen_addr.clone();

    // Create app state
    let state = Arc::new(AppState {
        config,
        default_api_key,
        fetcher: Fetcher::new(),
        synthesizer,
    });

    // Build router
    let app = Router::new()
        .route("/", get(routes::index))
        .route("/synthesize", post(routes::synthesize))
        .route("/health", get(routes::health))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    info!("Server starting on http://{}", listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
