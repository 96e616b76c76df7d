// SPDX-License-Identifier: MIT

//! Menu listing model from the JSON menu endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry from the `/dining/menu` JSON listing.
///
/// `link` points at the per-item HTML label page the nutrition scraper reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuReference {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
}

impl MenuReference {
    /// Extract the menu entries from a decoded menu document.
    pub fn list_from_document(document: &Value) -> Vec<Self> {
        document["menus"]
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| serde_json::from_value(entry.clone()).unwrap_or_default())
                    .collect()
            })
            .unwrap_or_default()
    }
}
