// SPDX-License-Identifier: MIT

//! PostgreSQL wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Dining halls (normalized locations from the upstream XML)
//! - Menu items (entries from the JSON menu listing)
//! - Menu item nutrients (scraped label data)
//! - User meal logs (meal-tracking state)
//!
//! The service can run without a database (pure proxy mode); in that case
//! every operation returns a database error when called.

use crate::error::AppError;
use crate::models::{DiningLocation, MenuReference, NutritionRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};

const MAX_CONNECTIONS: u32 = 5;

/// PostgreSQL database client.
#[derive(Clone)]
pub struct Db {
    pool: Option<PgPool>,
}

impl Db {
    /// Connect to PostgreSQL and run pending migrations.
    pub async fn new(database_url: &str) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to PostgreSQL: {}", e)))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {}", e)))?;

        tracing::info!("Connected to PostgreSQL");

        Ok(Self { pool: Some(pool) })
    }

    /// Create a detached client (proxy-only mode, or offline tests).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { pool: None }
    }

    /// True when a real database connection is attached.
    pub fn is_attached(&self) -> bool {
        self.pool.is_some()
    }

    fn get_pool(&self) -> Result<&PgPool, AppError> {
        self.pool
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (proxy mode)".to_string()))
    }

    // ─── Dining Halls ────────────────────────────────────────────

    /// Insert or update a dining hall keyed by its upstream DBID.
    pub async fn upsert_dining_hall(&self, location: &DiningLocation) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO dining_halls (database_id, name, map_name, latitude, longitude, building_name, amenities, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, now())
            ON CONFLICT (database_id) DO UPDATE SET
                name = EXCLUDED.name,
                map_name = EXCLUDED.map_name,
                latitude = EXCLUDED.latitude,
                longitude = EXCLUDED.longitude,
                building_name = EXCLUDED.building_name,
                amenities = EXCLUDED.amenities,
                updated_at = now()
            "#,
        )
        .bind(&location.dbid)
        .bind(&location.name)
        .bind(&location.map_name)
        .bind(location.geoloc.lat.parse::<f64>().ok())
        .bind(location.geoloc.long.parse::<f64>().ok())
        .bind(&location.building.name)
        .bind(&location.amenities)
        .execute(self.get_pool()?)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    // ─── Menu Items ──────────────────────────────────────────────

    /// Insert or update a menu item, keyed by its upstream item id.
    pub async fn upsert_menu_item(
        &self,
        location_dbid: &str,
        menu_id: &str,
        item: &MenuReference,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO menu_items (api_id, location_dbid, menu_id, name, description, link, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, now())
            ON CONFLICT (api_id) DO UPDATE SET
                location_dbid = EXCLUDED.location_dbid,
                menu_id = EXCLUDED.menu_id,
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                link = EXCLUDED.link,
                updated_at = now()
            "#,
        )
        .bind(&item.id)
        .bind(location_dbid)
        .bind(menu_id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.link)
        .execute(self.get_pool()?)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    // ─── Nutrients ───────────────────────────────────────────────

    /// Store the scraped nutrition label for a menu item link.
    ///
    /// The full record is kept as JSONB next to the fields the tracker
    /// queries directly.
    pub async fn upsert_nutrition(
        &self,
        link: &str,
        record: &NutritionRecord,
    ) -> Result<(), AppError> {
        let facts = serde_json::to_value(record)
            .map_err(|e| AppError::Database(format!("Failed to serialize nutrition: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO menu_item_nutrients (link, name, serving_size, calories, calories_from_fat, facts, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, now())
            ON CONFLICT (link) DO UPDATE SET
                name = EXCLUDED.name,
                serving_size = EXCLUDED.serving_size,
                calories = EXCLUDED.calories,
                calories_from_fat = EXCLUDED.calories_from_fat,
                facts = EXCLUDED.facts,
                updated_at = now()
            "#,
        )
        .bind(link)
        .bind(&record.name)
        .bind(&record.serving_size)
        .bind(&record.calories)
        .bind(&record.calories_from_fat)
        .bind(facts)
        .execute(self.get_pool()?)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    // ─── Meal Logs ───────────────────────────────────────────────

    /// Record a consumed meal for a user.
    pub async fn insert_meal_log(&self, entry: &MealLogEntry) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO user_meal_logs (net_id, menu_item_api_id, portions, meal_type, notes, consumed_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&entry.net_id)
        .bind(&entry.menu_item_api_id)
        .bind(entry.portions)
        .bind(&entry.meal_type)
        .bind(&entry.notes)
        .bind(entry.consumed_at)
        .execute(self.get_pool()?)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    /// Fetch a user's meal logs, most recent first.
    pub async fn list_meal_logs(&self, net_id: &str) -> Result<Vec<MealLogRow>, AppError> {
        sqlx::query_as(
            r#"
            SELECT id, net_id, menu_item_api_id, portions, meal_type, notes, consumed_at
            FROM user_meal_logs
            WHERE net_id = $1
            ORDER BY consumed_at DESC
            "#,
        )
        .bind(net_id)
        .fetch_all(self.get_pool()?)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
    }
}

/// A meal log entry to insert.
#[derive(Debug, Clone)]
pub struct MealLogEntry {
    pub net_id: String,
    pub menu_item_api_id: String,
    pub portions: f64,
    pub meal_type: String,
    pub notes: String,
    pub consumed_at: DateTime<Utc>,
}

/// A stored meal log row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MealLogRow {
    pub id: i64,
    pub net_id: String,
    pub menu_item_api_id: String,
    pub portions: f64,
    pub meal_type: String,
    pub notes: String,
    pub consumed_at: DateTime<Utc>,
}
