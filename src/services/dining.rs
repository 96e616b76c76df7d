// SPDX-License-Identifier: MIT

//! High-level dining API: locations, open-hours events, menus.
//!
//! Wraps the upstream `/dining/*` endpoints, gating XML through the vendor
//! XSD before decoding. The upstream expects camelCase parameter names.

use crate::decode;
use crate::error::AppError;
use crate::models::{CalendarFeed, DiningLocation};
use crate::services::{schemas, SchemaService, StudentApiClient, WireFormat};
use serde_json::Value;

const DINING_LOCATIONS: &str = "/dining/locations";
const DINING_EVENTS: &str = "/dining/events";
const DINING_MENU: &str = "/dining/menu";

/// Dining category covering the residential dining halls.
const DINING_HALL_CATEGORY: &str = "2";

/// The default place: the campus-wide dining calendar.
pub const DEFAULT_PLACE_ID: &str = "1007";

/// Dining information service over the upstream API.
#[derive(Clone)]
pub struct DiningService {
    client: StudentApiClient,
    schemas: SchemaService,
}

impl DiningService {
    pub fn new(client: StudentApiClient) -> Self {
        Self {
            schemas: SchemaService::new(client.clone()),
            client,
        }
    }

    /// Fetch the dining locations, validate against the vendor XSD, decode,
    /// and normalize into typed locations.
    pub async fn get_locations(&self) -> Result<Vec<DiningLocation>, AppError> {
        let response = self
            .client
            .get(
                DINING_LOCATIONS,
                &[("categoryId", DINING_HALL_CATEGORY)],
                WireFormat::Xml,
            )
            .await?;

        let xsd = self.schemas.get_dining_xsd().await?;
        if !schemas::validate_xml(&response, &xsd) {
            return Err(AppError::SchemaValidation(
                "invalid XML format for dining locations".to_string(),
            ));
        }

        let document = decode::xml::decode(&response)?;
        Ok(DiningLocation::list_from_document(&document))
    }

    /// Fetch dining venue open hours as an iCal stream for a given place.
    ///
    /// The response claims `text/plain` but is an iCal feed.
    pub async fn get_events(&self, place_id: &str) -> Result<CalendarFeed, AppError> {
        let response = self
            .client
            .get(DINING_EVENTS, &[("placeId", place_id)], WireFormat::Ical)
            .await?;

        decode::ical::decode(&response)
    }

    /// Fetch the JSON menu listing for a location and menu id.
    ///
    /// Menu ids look like `2026-08-27-Dinner`.
    pub async fn get_menu(&self, location_id: &str, menu_id: &str) -> Result<Value, AppError> {
        let response = self
            .client
            .get(
                DINING_MENU,
                &[("locationId", location_id), ("menuId", menu_id)],
                WireFormat::Json,
            )
            .await?;

        decode::json(&response)
    }
}
