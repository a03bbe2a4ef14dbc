use serde_json::{Map, Value};

/// Normalized per-100g nutrient summary. All four fields are always
/// present in the output; a field whose source key is missing is `None`
/// (the unknown marker), never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutrientSummary {
    pub kcal_100g: Option<Value>,
    pub protein_100g: Option<Value>,
    pub fat_100g: Option<Value>,
    pub carbs_100g: Option<Value>,
}

// Source key candidates per output field, in lookup order. Open Food Facts
// records are partially populated and key names vary between products.
const KCAL_KEYS: &[&str] = &["energy-kcal_100g", "energy-kcal", "energy_100g"];
const PROTEIN_KEYS: &[&str] = &["proteins_100g", "proteins"];
const FAT_KEYS: &[&str] = &["fat_100g", "fat"];
const CARBS_KEYS: &[&str] = &["carbohydrates_100g", "carbohydrates"];

/// First non-null value among the candidate keys. Explicit JSON null counts
/// as missing.
fn first_present(nutriments: &Map<String, Value>, keys: &[&str]) -> Option<Value> {
    keys.iter()
        .find_map(|key| nutriments.get(*key).filter(|v| !v.is_null()))
        .cloned()
}

/// Extract the four per-100g fields from a raw nutriment map. Each field is
/// resolved independently and values pass through untyped — no unit
/// conversion, no rounding. The extraction itself never fails.
pub fn extract_nutrients(nutriments: &Map<String, Value>) -> NutrientSummary {
    NutrientSummary {
        kcal_100g: first_present(nutriments, KCAL_KEYS),
        protein_100g: first_present(nutriments, PROTEIN_KEYS),
        fat_100g: first_present(nutriments, FAT_KEYS),
        carbs_100g: first_present(nutriments, CARBS_KEYS),
    }
}
