// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod event;
pub mod location;
pub mod menu;
pub mod nutrition;

pub use event::{CalendarFeed, CalendarInfo, DiningEvent};
pub use location::{Building, DiningLocation, GeoLocation};
pub use menu::MenuReference;
pub use nutrition::{CarbohydrateFacts, FatFacts, NutrientValue, NutritionRecord, VitaminFacts};
