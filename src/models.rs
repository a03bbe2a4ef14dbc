use serde::Deserialize;
use serde_json::{Map, Value};

use crate::nutrients::{extract_nutrients, NutrientSummary};

/// A classified user query. Digit-only input is a direct barcode lookup,
/// everything else goes to the free-text search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductQuery {
    Barcode(String),
    Text(String),
}

impl ProductQuery {
    /// Classify raw user input. Returns `None` for empty (or all-whitespace)
    /// input; the input is trimmed before classification.
    pub fn classify(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            Some(ProductQuery::Barcode(trimmed.to_string()))
        } else {
            Some(ProductQuery::Text(trimmed.to_string()))
        }
    }
}

/// Raw product record as returned by Open Food Facts. Records are ragged:
/// any field can be missing, so everything defaults. The nutriment payload
/// stays an untyped map because its key names vary between products.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Product {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub brands: String,
    #[serde(default)]
    pub serving_size: String,
    #[serde(default)]
    pub nutriments: Map<String, Value>,
}

/// One result row: the raw product paired with its normalized nutrient
/// summary. Rows are transient, rebuilt from scratch on every query.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub product: Product,
    pub nutrients: NutrientSummary,
}

impl ProductRow {
    pub fn from_product(product: Product) -> Self {
        let nutrients = extract_nutrients(&product.nutriments);
        Self { product, nutrients }
    }
}

/// Summarize a batch of products, one row per product
pub fn summarize_products(products: Vec<Product>) -> Vec<ProductRow> {
    products.into_iter().map(ProductRow::from_product).collect()
}
