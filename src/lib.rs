pub mod api;
pub mod error;
pub mod formatters;
pub mod models;
pub mod nutrients;
pub mod ui;

// Re-export commonly used items
pub use api::{fetch_product, search_products, ProductResponse, SearchResponse, DEFAULT_PAGE_SIZE};
pub use error::{ApiError, ApiResult};
pub use formatters::{format_details, format_macros, format_nutrient, UNKNOWN_VALUE};
pub use models::{summarize_products, Product, ProductQuery, ProductRow};
pub use nutrients::{extract_nutrients, NutrientSummary};
