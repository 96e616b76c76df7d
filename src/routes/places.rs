// SPDX-License-Identifier: MIT

//! Campus venue routes: open status and location search.

use crate::error::{AppError, Result};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

const OPEN_PLACES_TTL_SECS: i64 = 5 * 60;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/places/open/", get(get_open_places))
        .route("/api/locations/search/", get(search_location))
}

/// Get all campus venues with their current open status.
async fn get_open_places(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    let cache_key = "places/open".to_string();
    if let Some(body) = state.page_cache.get(&cache_key) {
        return Ok(Json(body));
    }

    let places = state.places_service.get_open_places().await?;

    let body = json!({
        "data": places,
        "message": "Successfully fetched open places"
    });
    state.page_cache.insert(cache_key, body.clone(), OPEN_PLACES_TTL_SECS);
    Ok(Json(body))
}

#[derive(Deserialize)]
struct SearchQuery {
    office: Option<String>,
}

/// Look up a location's name and id by office/building address.
async fn search_location(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>> {
    let office = query
        .office
        .ok_or_else(|| AppError::BadRequest("office is required".to_string()))?;

    let result = state.places_service.search_location(&office).await?;

    Ok(Json(json!({
        "data": result,
        "message": "Successfully searched locations"
    })))
}
