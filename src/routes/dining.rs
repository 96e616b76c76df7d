// SPDX-License-Identifier: MIT

//! Dining API routes.
//!
//! Each endpoint wraps the corresponding service call and returns a JSON
//! envelope `{data, message}`; missing required query parameters are 400.
//! Successful bodies are cached per endpoint + query in the page cache.

use crate::error::{AppError, Result};
use crate::models::MenuReference;
use crate::services::dining::DEFAULT_PLACE_ID;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Locations change rarely.
const LOCATIONS_TTL_SECS: i64 = 15 * 60;
/// Events and menus track the day's schedule.
const EVENTS_TTL_SECS: i64 = 5 * 60;
const MENU_TTL_SECS: i64 = 5 * 60;
/// Label pages are effectively static per item.
const NUTRITION_TTL_SECS: i64 = 60 * 60;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/dining/locations/", get(get_locations))
        .route("/api/dining/events/", get(get_events))
        .route("/api/dining/menu/", get(get_menu))
        .route("/api/dining/nutrition/", get(get_nutrition))
}

fn envelope(data: Value, message: &str) -> Value {
    json!({ "data": data, "message": message })
}

// ─── Locations ───────────────────────────────────────────────

/// Get all dining locations.
async fn get_locations(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    let cache_key = "dining/locations".to_string();
    if let Some(body) = state.page_cache.get(&cache_key) {
        return Ok(Json(body));
    }

    let locations = state.dining_service.get_locations().await?;

    if state.db.is_attached() {
        for location in &locations {
            if let Err(e) = state.db.upsert_dining_hall(location).await {
                tracing::warn!(error = %e, dbid = %location.dbid, "Failed to store dining hall, continuing anyway");
            }
        }
    }

    let body = envelope(
        serde_json::to_value(&locations).map_err(|e| AppError::Internal(e.into()))?,
        "Successfully fetched dining locations",
    );
    state.page_cache.insert(cache_key, body.clone(), LOCATIONS_TTL_SECS);
    Ok(Json(body))
}

// ─── Events ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct EventsQuery {
    place_id: Option<String>,
}

/// Get dining events/hours for a place.
async fn get_events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<Value>> {
    let place_id = query.place_id.unwrap_or_else(|| DEFAULT_PLACE_ID.to_string());

    let cache_key = format!("dining/events?place_id={}", place_id);
    if let Some(body) = state.page_cache.get(&cache_key) {
        return Ok(Json(body));
    }

    let feed = state.dining_service.get_events(&place_id).await?;

    let body = envelope(
        serde_json::to_value(&feed.events).map_err(|e| AppError::Internal(e.into()))?,
        "Successfully fetched dining events",
    );
    state.page_cache.insert(cache_key, body.clone(), EVENTS_TTL_SECS);
    Ok(Json(body))
}

// ─── Menu ────────────────────────────────────────────────────

#[derive(Deserialize)]
struct MenuQuery {
    location_id: Option<String>,
    menu_id: Option<String>,
}

/// Get the menu for a specific location.
async fn get_menu(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<Value>> {
    let (location_id, menu_id) = match (query.location_id, query.menu_id) {
        (Some(location_id), Some(menu_id)) => (location_id, menu_id),
        _ => {
            return Err(AppError::BadRequest(
                "location_id and menu_id are required".to_string(),
            ))
        }
    };

    let cache_key = format!("dining/menu?location_id={}&menu_id={}", location_id, menu_id);
    if let Some(body) = state.page_cache.get(&cache_key) {
        return Ok(Json(body));
    }

    let document = state.dining_service.get_menu(&location_id, &menu_id).await?;

    if state.db.is_attached() {
        for item in MenuReference::list_from_document(&document) {
            if let Err(e) = state.db.upsert_menu_item(&location_id, &menu_id, &item).await {
                tracing::warn!(error = %e, item = %item.id, "Failed to store menu item, continuing anyway");
            }
        }
    }

    let menus = document.get("menus").cloned().unwrap_or_else(|| json!([]));
    let body = envelope(menus, "Successfully fetched menu");
    state.page_cache.insert(cache_key, body.clone(), MENU_TTL_SECS);
    Ok(Json(body))
}

// ─── Nutrition ───────────────────────────────────────────────

#[derive(Deserialize)]
struct NutritionQuery {
    link: Option<String>,
}

/// Scrape the nutrition label behind a menu item's detail link.
async fn get_nutrition(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NutritionQuery>,
) -> Result<Json<Value>> {
    let link = query
        .link
        .ok_or_else(|| AppError::BadRequest("link is required".to_string()))?;

    let cache_key = format!("dining/nutrition?link={}", link);
    if let Some(body) = state.page_cache.get(&cache_key) {
        return Ok(Json(body));
    }

    let record = state.scraper.scrape(&link).await?;

    if state.db.is_attached() {
        if let Err(e) = state.db.upsert_nutrition(&link, &record).await {
            tracing::warn!(error = %e, "Failed to store nutrition record, continuing anyway");
        }
    }

    let body = envelope(
        serde_json::to_value(&record).map_err(|e| AppError::Internal(e.into()))?,
        "Successfully fetched nutrition facts",
    );
    state.page_cache.insert(cache_key, body.clone(), NUTRITION_TTL_SECS);
    Ok(Json(body))
}
