// SPDX-License-Identifier: MIT

//! Meal-tracking routes: log consumed meals and read them back.

use crate::db::MealLogEntry;
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

const MIN_PORTIONS: f64 = 0.1;
const MAX_PORTIONS: f64 = 10.0;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/meals/log/", get(get_meal_logs).post(log_meal))
}

#[derive(Deserialize)]
struct LogMealRequest {
    net_id: String,
    menu_item_api_id: String,
    #[serde(default = "default_portions")]
    portions: f64,
    #[serde(default)]
    meal_type: String,
    #[serde(default)]
    notes: String,
}

fn default_portions() -> f64 {
    1.0
}

/// Record a consumed meal.
async fn log_meal(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LogMealRequest>,
) -> Result<Json<Value>> {
    if request.net_id.is_empty() || request.menu_item_api_id.is_empty() {
        return Err(AppError::BadRequest(
            "net_id and menu_item_api_id are required".to_string(),
        ));
    }
    if !(MIN_PORTIONS..=MAX_PORTIONS).contains(&request.portions) {
        return Err(AppError::BadRequest(format!(
            "portions must be between {} and {}",
            MIN_PORTIONS, MAX_PORTIONS
        )));
    }

    let entry = MealLogEntry {
        net_id: request.net_id,
        menu_item_api_id: request.menu_item_api_id,
        portions: request.portions,
        meal_type: request.meal_type,
        notes: request.notes,
        consumed_at: chrono::Utc::now(),
    };

    state.db.insert_meal_log(&entry).await?;

    Ok(Json(json!({
        "data": null,
        "message": "Meal logged"
    })))
}

#[derive(Deserialize)]
struct MealLogsQuery {
    net_id: Option<String>,
}

/// Get a user's meal logs, most recent first.
async fn get_meal_logs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MealLogsQuery>,
) -> Result<Json<Value>> {
    let net_id = query
        .net_id
        .ok_or_else(|| AppError::BadRequest("net_id is required".to_string()))?;

    let logs = state.db.list_meal_logs(&net_id).await?;

    Ok(Json(json!({
        "data": logs,
        "message": "Successfully fetched meal logs"
    })))
}
