// SPDX-License-Identifier: MIT

//! Authenticated request client for the upstream student-app API.
//!
//! Issues GET requests with a bearer token and an `Accept` header matching
//! the requested wire format; the raw body text comes back tagged by that
//! format for the decoders. The upstream expects camelCase query parameters
//! (`categoryId`, `placeId`, `locationId`, `menuId`).

use crate::config::Config;
use crate::error::AppError;
use crate::services::TokenManager;

/// Wire format requested from the upstream via the `Accept` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    Json,
    Xml,
    Ical,
}

impl WireFormat {
    pub fn accept(self) -> &'static str {
        match self {
            WireFormat::Json => "application/json",
            WireFormat::Xml => "application/xml",
            WireFormat::Ical => "application/ical",
        }
    }
}

/// Upstream API client.
#[derive(Clone)]
pub struct StudentApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenManager,
}

impl StudentApiClient {
    /// Create a new client with its own token manager.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::new();
        Self {
            tokens: TokenManager::new(config, http.clone()),
            base_url: config.api_base_url.clone(),
            http,
        }
    }

    /// Authenticated GET returning the raw response body.
    ///
    /// Non-2xx statuses map to upstream errors; a 401 is tagged so callers
    /// can distinguish a rejected token. No call is retried.
    pub async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        fmt: WireFormat,
    ) -> Result<String, AppError> {
        let access_token = self.tokens.bearer_token().await?;
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .header(reqwest::header::ACCEPT, fmt.accept())
            .query(params)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status.as_u16() == 401 {
                return Err(AppError::Upstream(AppError::UPSTREAM_AUTH_ERROR.to_string()));
            }
            return Err(AppError::Upstream(format!("HTTP {}: {}", status, body)));
        }

        tracing::debug!(endpoint, "Upstream request successful");
        response
            .text()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to read response body: {}", e)))
    }
}
