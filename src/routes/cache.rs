// SPDX-License-Identifier: MIT

//! Time-boxed response cache keyed by endpoint + query.
//!
//! Replaces the page-cache decorator the service previously relied on:
//! successful response bodies are kept in memory for a per-endpoint TTL so
//! repeated polling does not hammer the upstream.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;

struct CachedPage {
    expires_at: DateTime<Utc>,
    body: Value,
}

/// Shared in-memory response cache.
#[derive(Clone, Default)]
pub struct PageCache {
    entries: Arc<DashMap<String, CachedPage>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached body if present and not expired. Expired entries are
    /// evicted on access.
    pub fn get(&self, key: &str) -> Option<Value> {
        let now = Utc::now();

        if let Some(entry) = self.entries.get(key) {
            if now < entry.expires_at {
                return Some(entry.body.clone());
            }
        }

        self.entries.remove(key);
        None
    }

    /// Cache a response body for `ttl_secs`.
    pub fn insert(&self, key: String, body: Value, ttl_secs: i64) {
        self.entries.insert(
            key,
            CachedPage {
                expires_at: Utc::now() + Duration::seconds(ttl_secs),
                body,
            },
        );
    }
}
