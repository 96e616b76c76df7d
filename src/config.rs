// SPDX-License-Identifier: MIT

//! Application configuration loaded from environment variables.
//!
//! Credentials for the upstream student-app API are fetched once at startup
//! and held in memory for the lifetime of the process.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Consumer key for the upstream token endpoint (public identifier)
    pub consumer_key: String,
    /// Consumer secret for the upstream token endpoint
    pub consumer_secret: String,
    /// Base URL of the upstream student-app API
    pub api_base_url: String,
    /// URL of the client-credentials token endpoint
    pub token_url: String,
    /// PostgreSQL connection string (empty = run without a database)
    pub database_url: String,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            consumer_key: "test_consumer_key".to_string(),
            consumer_secret: "test_consumer_secret".to_string(),
            api_base_url: "https://api.example.edu/student-app".to_string(),
            token_url: "https://api.example.edu/token".to_string(),
            database_url: String::new(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            consumer_key: env::var("CONSUMER_KEY")
                .map_err(|_| ConfigError::Missing("CONSUMER_KEY"))?,
            consumer_secret: env::var("CONSUMER_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("CONSUMER_SECRET"))?,
            api_base_url: env::var("API_BASE_URL")
                .map_err(|_| ConfigError::Missing("API_BASE_URL"))?,
            token_url: env::var("TOKEN_URL").map_err(|_| ConfigError::Missing("TOKEN_URL"))?,
            database_url: env::var("DATABASE_URL").unwrap_or_default(),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
