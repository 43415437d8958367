//! Cartel API - card deals backend.
//!
//! Serves greetings, a fixed set of mock collectible-card listings and a
//! diagnostic endpoint that reports on an optional database collaborator.

use std::sync::Arc;

use tokio::net::TcpListener;

mod api;
mod config;
mod domain;
mod engine;
mod error;
mod logging;
mod storage;

use crate::api::build_router;
use crate::config::Config;
use crate::engine::{DatabaseProbe, ListingCatalog};
use crate::storage::DatabaseSlot;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The listing table.
    pub catalog: Arc<ListingCatalog>,
    /// Diagnostic probe over the database collaborator.
    pub probe: Arc<DatabaseProbe>,
}

impl AppState {
    pub fn new(catalog: ListingCatalog, probe: DatabaseProbe) -> Self {
        Self {
            catalog: Arc::new(catalog),
            probe: Arc::new(probe),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        // Missing .env is expected in production
        eprintln!("Note: No .env file loaded ({e})");
    }

    // Initialize logging
    logging::init();

    tracing::info!("Starting Cartel API v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        database_enabled = %config.database.enabled,
        database_url_set = config.database.url().is_some(),
        database_name_set = config.database.name().is_some(),
        "Configuration loaded"
    );

    // Resolve the optional database collaborator
    let slot = DatabaseSlot::resolve(&config.database);
    match &slot {
        DatabaseSlot::Broken(reason) => {
            tracing::warn!(error = %reason, "Database collaborator could not be opened")
        }
        other => tracing::info!(database = other.describe(), "Database collaborator resolved"),
    }

    let catalog = ListingCatalog::standard();
    tracing::info!(listings = catalog.len(), "Listing catalog loaded");

    let probe = DatabaseProbe::from_config(slot, &config.database);
    let state = AppState::new(catalog, probe);

    // Build router
    let app = build_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
