// SPDX-License-Identifier: MIT

//! iCal-to-event-list decoder.
//!
//! The events endpoint answers with `Content-Type: text/plain` but the body
//! is an iCal stream. We capture the top-level calendar's metadata once and
//! every VEVENT into an ordered list. Other component kinds (VTODO, VJOURNAL,
//! timezones) are ignored. Timestamps are passed through exactly as decoded,
//! with no timezone conversion.

use crate::error::AppError;
use crate::models::{CalendarFeed, CalendarInfo, DiningEvent};
use ical::parser::ical::component::IcalEvent;
use ical::property::Property;

/// Decode an iCal text stream into calendar metadata plus its VEVENTs.
pub fn decode(text: &str) -> Result<CalendarFeed, AppError> {
    let mut calendar_info = CalendarInfo::default();
    let mut events = Vec::new();
    let mut seen_calendar = false;

    for calendar in ical::IcalParser::new(text.as_bytes()) {
        let calendar =
            calendar.map_err(|e| AppError::Decode(format!("malformed iCal: {}", e)))?;

        if !seen_calendar {
            calendar_info = CalendarInfo {
                calname: property(&calendar.properties, "X-WR-CALNAME"),
                timezone: property(&calendar.properties, "X-WR-TIMEZONE"),
                prodid: property(&calendar.properties, "PRODID"),
                version: property(&calendar.properties, "VERSION"),
            };
            seen_calendar = true;
        }

        for event in &calendar.events {
            events.push(decode_event(event));
        }
    }

    Ok(CalendarFeed {
        calendar_info,
        events,
    })
}

fn decode_event(event: &IcalEvent) -> DiningEvent {
    DiningEvent {
        summary: property(&event.properties, "SUMMARY"),
        start: property(&event.properties, "DTSTART"),
        end: property(&event.properties, "DTEND"),
        uid: property(&event.properties, "UID"),
        description: property(&event.properties, "DESCRIPTION"),
    }
}

/// First value of the named property, or the empty sentinel.
fn property(properties: &[Property], name: &str) -> String {
    properties
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .and_then(|p| p.value.clone())
        .unwrap_or_default()
}
