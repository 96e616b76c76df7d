// SPDX-License-Identifier: MIT

//! Calendar and event models decoded from the upstream iCal feed.

use serde::{Deserialize, Serialize};

/// Top-level calendar metadata, captured once per feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarInfo {
    pub calname: String,
    pub timezone: String,
    pub prodid: String,
    pub version: String,
}

/// A single VEVENT from the dining hours feed.
///
/// Timestamps are verbatim as decoded; no timezone conversion happens here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningEvent {
    pub summary: String,
    pub start: String,
    pub end: String,
    pub uid: String,
    pub description: String,
}

/// A decoded iCal feed: calendar metadata plus its events in feed order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarFeed {
    pub calendar_info: CalendarInfo,
    pub events: Vec<DiningEvent>,
}
