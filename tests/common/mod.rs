// SPDX-License-Identifier: MIT

use dining_gateway::config::Config;
use dining_gateway::db::Db;
use dining_gateway::routes::{create_router, PageCache};
use dining_gateway::services::{DiningService, NutritionScraper, PlacesService, StudentApiClient};
use dining_gateway::AppState;
use std::sync::Arc;

/// Create a test app with an offline mock database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let db = Db::new_mock();

    let client = StudentApiClient::new(&config);
    let dining_service = DiningService::new(client.clone());
    let places_service = PlacesService::new(client);
    let scraper = NutritionScraper::new().expect("scraper construction");

    let state = Arc::new(AppState {
        config,
        db,
        dining_service,
        places_service,
        scraper,
        page_cache: PageCache::new(),
    });

    (create_router(state.clone()), state)
}
