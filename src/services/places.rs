// SPDX-License-Identifier: MIT

//! Campus venue availability and location lookup.

use crate::decode;
use crate::error::AppError;
use crate::services::{StudentApiClient, WireFormat};
use serde_json::Value;

const PLACES_OPEN: &str = "/places/open";
const LOCATIONS_SEARCH: &str = "/locations/search";

/// Client for the `/places/open` and `/locations/search` endpoints.
#[derive(Clone)]
pub struct PlacesService {
    client: StudentApiClient,
}

impl PlacesService {
    pub fn new(client: StudentApiClient) -> Self {
        Self { client }
    }

    /// Venues with their current open status (`"open"` is `"yes"` or `"no"`).
    /// JSON-only endpoint.
    pub async fn get_open_places(&self) -> Result<Value, AppError> {
        let response = self.client.get(PLACES_OPEN, &[], WireFormat::Json).await?;
        decode::json(&response)
    }

    /// Name and id of a location given a home/office address.
    pub async fn search_location(&self, office: &str) -> Result<Value, AppError> {
        let response = self
            .client
            .get(LOCATIONS_SEARCH, &[("office", office)], WireFormat::Json)
            .await?;
        decode::json(&response)
    }
}
