// SPDX-License-Identifier: MIT

//! Dining location model and normalization from the decoded XML document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Latitude/longitude pair as reported by the upstream API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: String,
    pub long: String,
}

/// Campus building a dining location lives in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    pub location_id: String,
}

/// A dining location from the decoded `/dining/locations` XML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningLocation {
    pub name: String,
    #[serde(rename = "mapName")]
    pub map_name: String,
    pub dbid: String,
    pub geoloc: GeoLocation,
    pub building: Building,
    pub amenities: Vec<String>,
}

impl DiningLocation {
    /// Build a location from one decoded `location` entry.
    ///
    /// Every missing field defaults to its empty sentinel, so consumers only
    /// ever need emptiness checks.
    pub fn from_decoded(entry: &Value) -> Self {
        Self {
            name: text_field(entry, "name"),
            map_name: text_field(entry, "mapName"),
            dbid: text_field(entry, "dbid"),
            geoloc: GeoLocation {
                lat: text_field(&entry["geoloc"], "lat"),
                long: text_field(&entry["geoloc"], "long"),
            },
            building: Building {
                name: text_field(&entry["building"], "name"),
                location_id: text_field(&entry["building"], "location_id"),
            },
            amenities: normalize_amenities(&entry["amenities"]["amenity"]),
        }
    }

    /// Extract all locations from a decoded `/dining/locations` document.
    ///
    /// The decoder only produces an array when a tag repeats, so a document
    /// with a single `location` child yields an object here; both shapes are
    /// accepted.
    pub fn list_from_document(document: &Value) -> Vec<Self> {
        match &document["locations"]["location"] {
            Value::Array(entries) => entries.iter().map(Self::from_decoded).collect(),
            entry @ Value::Object(_) => vec![Self::from_decoded(entry)],
            _ => Vec::new(),
        }
    }
}

/// Amenities arrive as a list of `{name}` objects, or as a single object
/// when the location has exactly one amenity.
fn normalize_amenities(value: &Value) -> Vec<String> {
    match value {
        Value::Array(entries) => entries.iter().map(|a| text_field(a, "name")).collect(),
        Value::Object(_) => vec![text_field(value, "name")],
        _ => Vec::new(),
    }
}

fn text_field(value: &Value, key: &str) -> String {
    value[key].as_str().unwrap_or_default().to_string()
}
