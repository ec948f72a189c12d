/// Server setup and initialization
///
/// Wires together storage and HTTP routes. Provides the main application
/// factory function for creating the Axum app.

use crate::{
    api::{create_admin_routes, create_page_routes, AppState, PageRenderer},
    catalog::PortfolioStorage,
    config::Config,
};
use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Create the main Axum application with all routes
///
/// Opens the record store described by `config`, makes sure its schema exists
/// and mounts the public pages and the admin API on one router.
pub async fn create_app(config: Config) -> Result<Router> {
    tracing::info!("🗄️ Opening portfolio database: {}", config.database.connection_string);
    let storage = PortfolioStorage::connect(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to portfolio database: {:#}", e))?;

    tracing::info!("📋 Initializing portfolio schema");
    storage
        .init_schema()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize portfolio schema: {}", e))?;

    tracing::info!("🧩 Registering page templates");
    let renderer = PageRenderer::new()
        .map_err(|e| anyhow::anyhow!("Failed to register page templates: {}", e))?;

    let app_state = AppState {
        storage,
        renderer: Arc::new(renderer),
    };

    tracing::info!("📡 Creating HTTP router with all endpoints");
    let app = Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        // Public pages
        .merge(create_page_routes())
        // Admin CRUD
        .merge(create_admin_routes())
        .with_state(app_state);

    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Start the HTTP server with the given configuration
///
/// Creates the application and starts the Axum server on the configured address and port.
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Starting portfolio server...");

    let app = create_app(config.clone()).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
