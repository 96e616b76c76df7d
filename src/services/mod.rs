// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod dining;
pub mod places;
pub mod schemas;
pub mod scraper;
pub mod token;
pub mod upstream;

pub use dining::DiningService;
pub use places::PlacesService;
pub use schemas::SchemaService;
pub use scraper::NutritionScraper;
pub use token::TokenManager;
pub use upstream::{StudentApiClient, WireFormat};
