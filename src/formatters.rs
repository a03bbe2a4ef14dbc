use serde_json::Value;

use crate::models::ProductRow;
use crate::nutrients::NutrientSummary;

/// Placeholder shown when a nutrient value is missing from the source data
pub const UNKNOWN_VALUE: &str = "-";

/// Render a single nutrient value for display. Numbers and strings render
/// bare, a missing value becomes the unknown marker.
pub fn format_nutrient(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => UNKNOWN_VALUE.to_string(),
    }
}

/// Compact macros cell for the results table, e.g. "P:5 F:2.3 C:30"
pub fn format_macros(summary: &NutrientSummary) -> String {
    format!(
        "P:{} F:{} C:{}",
        format_nutrient(summary.protein_100g.as_ref()),
        format_nutrient(summary.fat_100g.as_ref()),
        format_nutrient(summary.carbs_100g.as_ref()),
    )
}

/// Multi-line details text for the selected product
pub fn format_details(row: &ProductRow) -> String {
    let mut output = String::new();

    output.push_str(&format!("Name: {}\n", row.product.product_name));
    output.push_str(&format!("Brand: {}\n", row.product.brands));
    output.push_str(&format!("Barcode: {}\n", row.product.code));
    output.push_str(&format!("Serving size: {}\n", row.product.serving_size));
    output.push('\n');
    output.push_str(&format!(
        "Energy (per 100g): {} kcal\n",
        format_nutrient(row.nutrients.kcal_100g.as_ref())
    ));
    output.push_str(&format!(
        "Protein: {}\n",
        format_nutrient(row.nutrients.protein_100g.as_ref())
    ));
    output.push_str(&format!(
        "Fat: {}\n",
        format_nutrient(row.nutrients.fat_100g.as_ref())
    ));
    output.push_str(&format!(
        "Carbohydrates: {}\n",
        format_nutrient(row.nutrients.carbs_100g.as_ref())
    ));

    output
}
