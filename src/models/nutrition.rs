// SPDX-License-Identifier: MIT

//! Nutrition facts scraped from a menu item's HTML label page.
//!
//! Serialized field names mirror the label page's own headings so the JSON
//! shape matches what the meal-tracking frontend already consumes. Every
//! field defaults to an empty string or list, never null: consumers check
//! for emptiness, not presence.

use serde::{Deserialize, Serialize};

/// An amount/daily-value pair for one nutrient row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientValue {
    #[serde(rename = "Amount", default)]
    pub amount: String,
    #[serde(rename = "Daily Value", default)]
    pub daily_value: String,
}

/// Fat section of the label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FatFacts {
    #[serde(rename = "Total Fat", default)]
    pub total_fat: NutrientValue,
    #[serde(rename = "Saturated Fat", default)]
    pub saturated_fat: NutrientValue,
    #[serde(rename = "Trans Fat", default)]
    pub trans_fat: NutrientValue,
}

/// Carbohydrate section of the label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarbohydrateFacts {
    #[serde(rename = "Total Carbohydrates", default)]
    pub total_carbohydrates: NutrientValue,
    #[serde(rename = "Dietary Fiber", default)]
    pub dietary_fiber: NutrientValue,
    #[serde(rename = "Sugar", default)]
    pub sugar: NutrientValue,
}

/// Vitamin/mineral daily values from the label footnote list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitaminFacts {
    #[serde(rename = "Vitamin D", default)]
    pub vitamin_d: NutrientValue,
    #[serde(rename = "Calcium", default)]
    pub calcium: NutrientValue,
    #[serde(rename = "Iron", default)]
    pub iron: NutrientValue,
    #[serde(rename = "Potassium", default)]
    pub potassium: NutrientValue,
}

/// The complete scraped nutrition label for one menu item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionRecord {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Serving Size", default)]
    pub serving_size: String,
    #[serde(rename = "Calories", default)]
    pub calories: String,
    #[serde(rename = "Calories from Fat", default)]
    pub calories_from_fat: String,
    #[serde(rename = "Ingredients", default)]
    pub ingredients: Vec<String>,
    #[serde(rename = "Allergens", default)]
    pub allergens: Vec<String>,
    #[serde(rename = "Fat", default)]
    pub fat: FatFacts,
    #[serde(rename = "Cholesterol", default)]
    pub cholesterol: NutrientValue,
    #[serde(rename = "Sodium", default)]
    pub sodium: NutrientValue,
    #[serde(rename = "Carbohydrates", default)]
    pub carbohydrates: CarbohydrateFacts,
    #[serde(rename = "Protein", default)]
    pub protein: NutrientValue,
    #[serde(rename = "Vitamins", default)]
    pub vitamins: VitaminFacts,
}
