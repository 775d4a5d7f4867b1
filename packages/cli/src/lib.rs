// ABOUTME: Server bootstrap for the trivia API
// ABOUTME: Wires configuration, logging, CORS, and the SQLite-backed router together

use std::net::SocketAddr;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trivia_api::{create_router, AppState};
use trivia_storage::init_pool;

pub mod config;

use config::{Config, ConfigError, ANY_ORIGIN};

/// Install the global tracing subscriber; `RUST_LOG` wins over `default_level`
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// CORS policy for the API routes
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let allow_origin = if origin == ANY_ORIGIN {
        AllowOrigin::any()
    } else {
        let value = origin
            .parse::<HeaderValue>()
            .map_err(|_| ConfigError::InvalidCorsOrigin(origin.to_string()))?;
        AllowOrigin::exact(value)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

/// Router with CORS and request tracing applied
pub fn build_app(state: AppState, config: &Config) -> Result<Router, ConfigError> {
    Ok(create_router(state)
        .layer(cors_layer(&config.cors_origin)?)
        .layer(TraceLayer::new_for_http()))
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let pool = init_pool(&config.database_path).await?;
    let app = build_app(AppState::from_pool(pool), &config)?;

    let addr = SocketAddr::new(config.host, config.port);
    info!("Database: {}", config.database_path.display());
    info!("CORS origin: {}", config.cors_origin);
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Never resolve so the server keeps running
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
