// SPDX-License-Identifier: MIT

use dining_gateway::models::NutritionRecord;
use dining_gateway::services::NutritionScraper;

const LABEL_PAGE: &str = r#"
<html><body>
  <h2> Grilled Chicken </h2>
  <div class="labelingredientsvalue">chicken breast, salt, BLACK PEPPER</div>
  <div class="labelallergensvalue">Ingredients include soy, wheat</div>
  <div id="facts2">Serving Size 4 oz</div>
  <div id="facts2">Calories 180</div>
  <div id="facts2">Calories from Fat 45</div>
  <div id="facts4">Total Fat 5g</div><div id="facts4">8%</div>
  <div id="facts4">Tot. Carb. 2g</div><div id="facts4">1%</div>
  <div id="facts4">Sat. Fat 1.5g</div><div id="facts4">8%</div>
  <div id="facts4">Dietary Fiber 0g</div><div id="facts4">0%</div>
  <div id="facts4">Trans Fat 0g</div><div id="facts4">0%</div>
  <div id="facts4">Sugars 1g</div><div id="facts4">2%</div>
  <div id="facts4">Cholesterol 85mg</div><div id="facts4">28%</div>
  <div id="facts4">Protein 28g</div><div id="facts4">56%</div>
  <div id="facts4">Sodium 440mg</div><div id="facts4">19%</div>
  <ul>
    <li>Vitamin D 0mcg <span>0%</span></li>
    <li>Potassium 350mg <span>8%</span></li>
    <li>Calcium 20mg <span>2%</span></li>
    <li>Iron 1mg <span>6%</span></li>
  </ul>
</body></html>
"#;

fn scraper() -> NutritionScraper {
    NutritionScraper::new().expect("scraper construction")
}

#[test]
fn test_full_label_page_extraction() {
    let record = scraper().extract(LABEL_PAGE);

    assert_eq!(record.name, "Grilled Chicken");
    assert_eq!(
        record.ingredients,
        vec!["Chicken breast", "Salt", "Black pepper"]
    );
    assert_eq!(record.allergens, vec!["Soy", "Wheat"]);

    assert_eq!(record.serving_size, "4 oz");
    assert_eq!(record.calories, "180");
    assert_eq!(record.calories_from_fat, "45");

    assert_eq!(record.fat.total_fat.amount, "5g");
    assert_eq!(record.fat.total_fat.daily_value, "8%");
    assert_eq!(record.fat.saturated_fat.amount, "1.5g");
    assert_eq!(record.fat.trans_fat.amount, "0g");
    assert_eq!(record.carbohydrates.total_carbohydrates.amount, "2g");
    assert_eq!(record.carbohydrates.dietary_fiber.amount, "0g");
    assert_eq!(record.carbohydrates.sugar.amount, "1g");
    assert_eq!(record.cholesterol.amount, "85mg");
    assert_eq!(record.cholesterol.daily_value, "28%");
    assert_eq!(record.protein.amount, "28g");
    assert_eq!(record.sodium.amount, "440mg");

    assert_eq!(record.vitamins.vitamin_d.daily_value, "0%");
    assert_eq!(record.vitamins.potassium.daily_value, "8%");
    assert_eq!(record.vitamins.calcium.daily_value, "2%");
    assert_eq!(record.vitamins.iron.daily_value, "6%");
}

#[test]
fn test_missing_ingredients_leaves_other_groups_intact() {
    let page = LABEL_PAGE.replace("labelingredientsvalue", "somethingelse");
    let record = scraper().extract(&page);

    assert!(record.ingredients.is_empty());
    // Every other group still populates.
    assert_eq!(record.name, "Grilled Chicken");
    assert_eq!(record.allergens, vec!["Soy", "Wheat"]);
    assert_eq!(record.calories, "180");
    assert_eq!(record.fat.total_fat.amount, "5g");
    assert_eq!(record.vitamins.iron.daily_value, "6%");
}

#[test]
fn test_empty_page_yields_empty_sentinels() {
    let record = scraper().extract("<html><body></body></html>");
    assert_eq!(record, NutritionRecord::default());
}

#[test]
fn test_non_numeric_calories_reset_to_empty() {
    let page = LABEL_PAGE.replace("Calories 180", "Calories Varies");
    let record = scraper().extract(&page);

    assert_eq!(record.calories, "");
    assert_eq!(record.calories_from_fat, "45");
}

#[test]
fn test_serving_size_without_digits_reset_to_empty() {
    let page = LABEL_PAGE.replace("Serving Size 4 oz", "Serving Size N/A");
    let record = scraper().extract(&page);

    assert_eq!(record.serving_size, "");
}

#[test]
fn test_allergen_prefix_not_repeated_is_kept_as_is() {
    let page = LABEL_PAGE.replace("Ingredients include soy, wheat", "soy, wheat");
    let record = scraper().extract(&page);

    assert_eq!(record.allergens, vec!["Soy", "Wheat"]);
}

#[test]
fn test_reordered_fact_cells_still_land_by_label() {
    // Swap the Protein and Sodium rows relative to the fixed layout.
    let page = LABEL_PAGE
        .replace(
            r#"<div id="facts4">Protein 28g</div><div id="facts4">56%</div>
  <div id="facts4">Sodium 440mg</div><div id="facts4">19%</div>"#,
            r#"<div id="facts4">Sodium 440mg</div><div id="facts4">19%</div>
  <div id="facts4">Protein 28g</div><div id="facts4">56%</div>"#,
        );
    let record = scraper().extract(&page);

    assert_eq!(record.protein.amount, "28g");
    assert_eq!(record.protein.daily_value, "56%");
    assert_eq!(record.sodium.amount, "440mg");
    assert_eq!(record.sodium.daily_value, "19%");
}
