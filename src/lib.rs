// SPDX-License-Identifier: MIT

//! Dining Gateway: proxy and cache for a university student-information API.
//!
//! This crate wraps the upstream dining endpoints (locations, events, menus),
//! scrapes nutrition labels from per-item HTML pages, and persists normalized
//! results for a meal-tracking application.

pub mod config;
pub mod db;
pub mod decode;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::Db;
use routes::PageCache;
use services::{DiningService, NutritionScraper, PlacesService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Db,
    pub dining_service: DiningService,
    pub places_service: PlacesService,
    pub scraper: NutritionScraper,
    pub page_cache: PageCache,
}
