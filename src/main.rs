//! Posts API - in-memory blog post service
//!
//! Serves a JSON CRUD API over posts kept in process memory, with
//! permissive CORS and a small demo page at `/`. All state resets on restart.

use posts_api::{build_router, AppState, Config, PostStore};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize structured logging
    init_tracing();

    // Load configuration
    let config = Config::from_env();

    let store = Arc::new(PostStore::seeded());
    log_startup_info(&config, store.len().await);

    let state = AppState::new(store, config.clone());

    // Build and serve the application
    let app = build_router(state);
    serve(app, &config).await;
}

/// Initialize tracing with environment-based log levels.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("posts_api=debug,tower_http=info")),
        )
        .init();
}

/// Log startup configuration.
fn log_startup_info(config: &Config, seed_count: usize) {
    info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        environment = config.environment().as_str(),
        home_page = config.home_page.as_str(),
        max_body_size = config.max_body_size,
        seed_count,
        "Starting posts API"
    );
}

/// Bind to address and serve the application.
async fn serve(app: axum::Router, config: &Config) {
    let bind_addr = format!("{}:{}", config.bind_addr, config.port);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind to address");

    info!(addr = %bind_addr, "Server listening");

    axum::serve(listener, app).await.expect("Server error");
}
