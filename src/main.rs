//! Code Arena - Application Entry Point
//!
//! This is the main entry point for the Code Arena server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codearena::{
    catalog::{StaticFixtureProvider, StaticProblemCatalog},
    config::CONFIG,
    handlers,
    judge::Judge0Client,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Code Arena server...");

    // Initialize the remote judge client
    tracing::info!(judge_api = %CONFIG.judge.api_url, "Configuring judge client...");
    let judge = Arc::new(Judge0Client::new(CONFIG.judge.clone())?);

    // Create application state with the built-in catalogs
    let state = AppState::new(
        judge,
        Arc::new(StaticProblemCatalog::new()),
        Arc::new(StaticFixtureProvider::new()),
        CONFIG.clone(),
    );

    // Build the router
    let app = Router::new()
        .nest("/api", handlers::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
