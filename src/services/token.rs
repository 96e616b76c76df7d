// SPDX-License-Identifier: MIT

//! Bearer-token manager for the upstream API.
//!
//! The upstream uses an OAuth-style client-credentials grant: a POST to the
//! token endpoint with HTTP Basic auth (consumer key/secret) yields a bearer
//! token. The token is cached in memory with its expiry and re-fetched once
//! it is within the refresh margin. Failed upstream requests are never
//! retried with a fresh token; the error propagates to the caller.

use crate::config::Config;
use crate::error::AppError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Margin before token expiration when we proactively re-fetch.
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

/// Assumed lifetime when the token endpoint omits `expires_in`.
const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// Cached access token with expiry information.
#[derive(Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

/// Token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<i64>,
}

/// Manages the client-credentials token lifecycle.
///
/// There is exactly one principal (the service's consumer key), so a single
/// `RwLock`-guarded slot suffices; the write lock also serializes concurrent
/// refresh attempts.
#[derive(Clone)]
pub struct TokenManager {
    http: reqwest::Client,
    token_url: String,
    consumer_key: String,
    consumer_secret: String,
    cached: Arc<RwLock<Option<CachedToken>>>,
}

impl TokenManager {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            token_url: config.token_url.clone(),
            consumer_key: config.consumer_key.clone(),
            consumer_secret: config.consumer_secret.clone(),
            cached: Arc::new(RwLock::new(None)),
        }
    }

    /// Get a valid (non-expired) bearer token, fetching a new one if needed.
    pub async fn bearer_token(&self) -> Result<String, AppError> {
        let now = Utc::now();
        let margin = Duration::seconds(TOKEN_REFRESH_MARGIN_SECS);

        if let Some(cached) = self.cached.read().await.as_ref() {
            if now + margin < cached.expires_at {
                return Ok(cached.access_token.clone());
            }
        }

        let mut slot = self.cached.write().await;
        // Another task may have refreshed while we waited for the lock.
        if let Some(cached) = slot.as_ref() {
            if now + margin < cached.expires_at {
                return Ok(cached.access_token.clone());
            }
        }

        let fresh = self.fetch_token().await?;
        let access_token = fresh.access_token.clone();
        *slot = Some(fresh);
        tracing::info!("Bearer token refreshed");
        Ok(access_token)
    }

    /// Exchange consumer credentials for a bearer token.
    async fn fetch_token(&self) -> Result<CachedToken, AppError> {
        let basic = STANDARD.encode(format!("{}:{}", self.consumer_key, self.consumer_secret));

        let response = self
            .http
            .post(&self.token_url)
            .header(reqwest::header::AUTHORIZATION, format!("Basic {}", basic))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Token request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Token exchange failed");
            return Err(AppError::Upstream(format!(
                "Token exchange failed with status {}",
                status
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::Decode(format!("Failed to decode token response: {}", e)))?;

        let lifetime = token.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);

        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: Utc::now() + Duration::seconds(lifetime),
        })
    }
}
