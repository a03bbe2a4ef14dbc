//! API client for the Open Food Facts product database

pub mod openfoodfacts;

// Re-exports for public API convenience
pub use openfoodfacts::{
    fetch_product, search_products, ProductResponse, SearchResponse, DEFAULT_PAGE_SIZE,
};
