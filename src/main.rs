// SPDX-License-Identifier: MIT

//! Dining Gateway API Server
//!
//! Proxies a university student-information API (dining locations, menus,
//! open-hours events), scrapes nutrition labels, and persists normalized
//! results for meal tracking.

use dining_gateway::{
    config::Config,
    db::Db,
    routes::PageCache,
    services::{DiningService, NutritionScraper, PlacesService, StudentApiClient},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Dining Gateway API");

    // Database is optional: without DATABASE_URL the service runs as a pure proxy.
    let db = if config.database_url.is_empty() {
        tracing::warn!("DATABASE_URL not set, running in proxy-only mode");
        Db::new_mock()
    } else {
        Db::new(&config.database_url)
            .await
            .expect("Failed to connect to PostgreSQL")
    };

    // Upstream client and services
    let client = StudentApiClient::new(&config);
    let dining_service = DiningService::new(client.clone());
    let places_service = PlacesService::new(client);
    let scraper = NutritionScraper::new().expect("Failed to initialize nutrition scraper");
    tracing::info!("Upstream services initialized");

    let page_cache = PageCache::new();

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        dining_service,
        places_service,
        scraper,
        page_cache,
    });

    // Build router
    let app = dining_gateway::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dining_gateway=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
