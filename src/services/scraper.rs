// SPDX-License-Identifier: MIT

//! HTML nutrition-label scraper.
//!
//! Each menu item links to an HTML label page; this service fetches it and
//! extracts a fixed nutrition schema. Extraction is keyed by the nearest
//! preceding label text (`"Total Fat"`, `"Serving Size"`, ...) so reordered
//! markup still lands in the right field; when no label matches, the
//! original page's fixed document-order index is used as a compatibility
//! fallback.
//!
//! Extraction groups (ingredients, allergens, name, serving facts, nutrition
//! facts, vitamins) are independent: a missing element or short element set
//! in one group is logged and leaves that group's fields at their
//! empty-sentinel defaults without aborting the others.

use crate::error::AppError;
use crate::models::{NutrientValue, NutritionRecord};
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;

/// Fixed connect/read timeout for label-page fetches.
const LABEL_FETCH_TIMEOUT_SECS: u64 = 10;

/// Allergen cells sometimes repeat this prefix from the ingredients cell.
const ALLERGEN_PREFIX: &str = "Ingredients include";

/// Amount rows of the `facts4` element set, with each label's fixed
/// document-order index on the label page. The daily-value cell always
/// directly follows its amount cell.
const NUTRITION_ROWS: [(&str, usize); 9] = [
    ("Total Fat", 0),
    ("Tot. Carb.", 2),
    ("Sat. Fat", 4),
    ("Dietary Fiber", 6),
    ("Trans Fat", 8),
    ("Sugars", 10),
    ("Cholesterol", 12),
    ("Protein", 14),
    ("Sodium", 16),
];

/// Vitamin/mineral footnote entries with their fixed `<li>` index.
const VITAMIN_ROWS: [(&str, usize); 4] = [
    ("Vitamin D", 0),
    ("Potassium", 1),
    ("Calcium", 2),
    ("Iron", 3),
];

struct Selectors {
    ingredients: Selector,
    allergens: Selector,
    name: Selector,
    serving_facts: Selector,
    nutrition_facts: Selector,
    footnotes: Selector,
    span: Selector,
}

/// Scraper for menu-item nutrition label pages.
#[derive(Clone)]
pub struct NutritionScraper {
    http: reqwest::Client,
    selectors: std::sync::Arc<Selectors>,
}

impl NutritionScraper {
    pub fn new() -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(LABEL_FETCH_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client: {}", e)))?;

        Ok(Self {
            http,
            selectors: std::sync::Arc::new(Selectors {
                ingredients: parse_selector(".labelingredientsvalue")?,
                allergens: parse_selector(".labelallergensvalue")?,
                name: parse_selector("h2")?,
                // The label page repeats ids, so match by attribute.
                serving_facts: parse_selector(r#"[id="facts2"]"#)?,
                nutrition_facts: parse_selector(r#"[id="facts4"]"#)?,
                footnotes: parse_selector("li")?,
                span: parse_selector("span")?,
            }),
        })
    }

    /// Fetch and extract the nutrition label behind a menu item link.
    pub async fn scrape(&self, link: &str) -> Result<NutritionRecord, AppError> {
        let html = self.fetch_label(link).await?;
        Ok(self.extract(&html))
    }

    /// Fetch the raw label page HTML.
    pub async fn fetch_label(&self, link: &str) -> Result<String, AppError> {
        if link.is_empty() {
            return Err(AppError::BadRequest("no label link provided".to_string()));
        }

        let response = self
            .http
            .get(link)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Label page fetch failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!("Label page HTTP {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to read label page: {}", e)))
    }

    /// Extract the nutrition schema from a label page.
    ///
    /// Never fails: each group that cannot be extracted is logged and left at
    /// its empty-sentinel default.
    pub fn extract(&self, html: &str) -> NutritionRecord {
        let document = Html::parse_document(html);
        let mut record = NutritionRecord::default();

        self.extract_ingredients(&document, &mut record);
        self.extract_allergens(&document, &mut record);
        self.extract_name(&document, &mut record);
        self.extract_serving_facts(&document, &mut record);
        self.extract_nutrition_facts(&document, &mut record);
        self.extract_vitamins(&document, &mut record);

        record
    }

    fn extract_ingredients(&self, document: &Html, record: &mut NutritionRecord) {
        match document.select(&self.selectors.ingredients).next() {
            Some(element) => {
                record.ingredients = split_list(&element_text(element));
            }
            None => tracing::warn!("Ingredients cell not found on label page"),
        }
    }

    fn extract_allergens(&self, document: &Html, record: &mut NutritionRecord) {
        match document.select(&self.selectors.allergens).next() {
            Some(element) => {
                let text = element_text(element);
                let text = text.trim();
                let truncated = text.strip_prefix(ALLERGEN_PREFIX).unwrap_or(text);
                record.allergens = split_list(truncated);
            }
            None => tracing::warn!("Allergens cell not found on label page"),
        }
    }

    fn extract_name(&self, document: &Html, record: &mut NutritionRecord) {
        match document.select(&self.selectors.name).next() {
            Some(element) => record.name = element_text(element).trim().to_string(),
            None => tracing::warn!("Name heading not found on label page"),
        }
    }

    /// Serving size, calories, and calories-from-fat from the `facts2` cells.
    fn extract_serving_facts(&self, document: &Html, record: &mut NutritionRecord) {
        let texts: Vec<String> = document
            .select(&self.selectors.serving_facts)
            .map(element_text)
            .collect();

        if texts.is_empty() {
            tracing::warn!("Serving facts cells not found on label page");
            return;
        }

        record.serving_size = keep_if_any_digit(labeled_value(&texts, "Serving Size", &[], 0));
        // "Calories" is a prefix of "Calories from Fat": match the longer
        // label first and exclude it when looking for the shorter one.
        record.calories_from_fat =
            keep_if_numeric(labeled_value(&texts, "Calories from Fat", &[], 2));
        record.calories =
            keep_if_numeric(labeled_value(&texts, "Calories", &["Calories from Fat"], 1));
    }

    /// The eighteen amount/daily-value cells of the `facts4` set.
    fn extract_nutrition_facts(&self, document: &Html, record: &mut NutritionRecord) {
        let texts: Vec<String> = document
            .select(&self.selectors.nutrition_facts)
            .map(element_text)
            .collect();

        if texts.is_empty() {
            tracing::warn!("Nutrition facts cells not found on label page");
            return;
        }

        for (label, index) in NUTRITION_ROWS {
            let value = nutrient_pair(&texts, label, index);
            match label {
                "Total Fat" => record.fat.total_fat = value,
                "Sat. Fat" => record.fat.saturated_fat = value,
                "Trans Fat" => record.fat.trans_fat = value,
                "Tot. Carb." => record.carbohydrates.total_carbohydrates = value,
                "Dietary Fiber" => record.carbohydrates.dietary_fiber = value,
                "Sugars" => record.carbohydrates.sugar = value,
                "Cholesterol" => record.cholesterol = value,
                "Protein" => record.protein = value,
                "Sodium" => record.sodium = value,
                _ => unreachable!(),
            }
        }
    }

    /// Vitamin/mineral daily values from the footnote `<li><span>` entries.
    fn extract_vitamins(&self, document: &Html, record: &mut NutritionRecord) {
        let items: Vec<ElementRef> = document.select(&self.selectors.footnotes).collect();

        if items.is_empty() {
            tracing::warn!("Vitamin footnotes not found on label page");
            return;
        }

        for (label, index) in VITAMIN_ROWS {
            let item = items
                .iter()
                .find(|li| element_text(**li).contains(label))
                .or_else(|| items.get(index));

            let daily_value = match item.and_then(|li| li.select(&self.selectors.span).next()) {
                Some(span) => keep_if_any_digit(element_text(span).trim().to_string()),
                None => {
                    tracing::warn!(label, "Vitamin footnote entry missing");
                    String::new()
                }
            };

            match label {
                "Vitamin D" => record.vitamins.vitamin_d.daily_value = daily_value,
                "Potassium" => record.vitamins.potassium.daily_value = daily_value,
                "Calcium" => record.vitamins.calcium.daily_value = daily_value,
                "Iron" => record.vitamins.iron.daily_value = daily_value,
                _ => unreachable!(),
            }
        }
    }
}

fn parse_selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid selector '{}': {:?}", css, e)))
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

/// Split a comma-separated cell into trimmed, capitalized entries.
fn split_list(text: &str) -> Vec<String> {
    text.split(',').map(|item| capitalize(item.trim())).collect()
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Keep the value only if it contains at least one digit.
fn keep_if_any_digit(text: String) -> String {
    if has_digit(&text) {
        text
    } else {
        String::new()
    }
}

/// Keep the value only if it is entirely numeric.
fn keep_if_numeric(text: String) -> String {
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        text
    } else {
        String::new()
    }
}

/// Find the cell carrying `label` and return its text with the label
/// stripped. Falls back to the fixed document-order index when no cell
/// matches, stripping a label-sized prefix as the original page layout
/// requires.
fn labeled_value(texts: &[String], label: &str, exclude: &[&str], fallback: usize) -> String {
    let matched = texts.iter().find(|t| {
        let t = t.trim();
        t.starts_with(label) && !exclude.iter().any(|e| t.starts_with(e))
    });

    match matched.or_else(|| texts.get(fallback)) {
        Some(text) => strip_label(text, label),
        None => String::new(),
    }
}

/// An amount/daily-value pair: the amount cell matched by label (or fixed
/// index), the daily-value cell immediately after it.
fn nutrient_pair(texts: &[String], label: &str, fallback: usize) -> NutrientValue {
    let index = texts
        .iter()
        .position(|t| t.trim().starts_with(label))
        .or(if fallback < texts.len() {
            Some(fallback)
        } else {
            None
        });

    match index {
        Some(i) => NutrientValue {
            amount: keep_if_any_digit(strip_label(&texts[i], label)),
            daily_value: texts
                .get(i + 1)
                .map(|t| keep_if_any_digit(t.trim().to_string()))
                .unwrap_or_default(),
        },
        None => {
            tracing::warn!(label, "Nutrition facts entry missing");
            NutrientValue::default()
        }
    }
}

/// Strip the label prefix from a cell's text. When the cell does not start
/// with the label (index-based fallback), drop a label-sized prefix instead,
/// matching the page's fixed layout.
fn strip_label(text: &str, label: &str) -> String {
    let trimmed = text.trim();
    match trimmed.strip_prefix(label) {
        Some(rest) => rest.trim().to_string(),
        None => trimmed
            .chars()
            .skip(label.chars().count())
            .collect::<String>()
            .trim()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_lowercases_the_tail() {
        assert_eq!(capitalize("WHEAT FLOUR"), "Wheat flour");
        assert_eq!(capitalize("milk"), "Milk");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn numeric_filter_rejects_units() {
        assert_eq!(keep_if_numeric("250".to_string()), "250");
        assert_eq!(keep_if_numeric("250 kcal".to_string()), "");
        assert_eq!(keep_if_numeric(String::new()), "");
    }

    #[test]
    fn any_digit_filter_keeps_units() {
        assert_eq!(keep_if_any_digit("4 oz".to_string()), "4 oz");
        assert_eq!(keep_if_any_digit("N/A".to_string()), "");
    }

    #[test]
    fn strip_label_falls_back_to_positional_slice() {
        assert_eq!(strip_label("Total Fat 2g", "Total Fat"), "2g");
        // Cell no longer carries the expected label text: positional slice.
        assert_eq!(strip_label("Ttl. Fat   2g", "Total Fat"), "2g");
    }
}
