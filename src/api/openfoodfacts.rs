use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::models::Product;

/// Production API host
const BASE_URL: &str = "https://world.openfoodfacts.org";

/// Default number of search results per request
pub const DEFAULT_PAGE_SIZE: u32 = 10;

const USER_AGENT: &str = "CalorieCheck/1.0";

/// Response of the product-detail endpoint. `product` is absent when the
/// barcode is unknown to the database; that is a normal outcome, not an
/// error.
#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    #[serde(default)]
    pub product: Option<Product>,
}

/// Response of the text-search endpoint. An empty `products` list means
/// nothing matched.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Look up a single product by its barcode
pub fn fetch_product(barcode: &str) -> ApiResult<ProductResponse> {
    fetch_product_from(BASE_URL, barcode)
}

/// Fetches a product from the given host (for testing with mock servers).
pub(crate) fn fetch_product_from(base_url: &str, barcode: &str) -> ApiResult<ProductResponse> {
    let url = format!("{}/api/v0/product/{}.json", base_url, barcode);

    log::info!("Fetching product by barcode: {}", url);

    let response = reqwest::blocking::Client::new()
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .send()?;

    if !response.status().is_success() {
        return Err(ApiError::HttpStatus(response.status()));
    }

    let body = response.text()?;
    Ok(serde_json::from_str::<ProductResponse>(&body)?)
}

/// Search products by free text, bounded to `page_size` results
pub fn search_products(query: &str, page_size: u32) -> ApiResult<SearchResponse> {
    search_products_from(BASE_URL, query, page_size)
}

/// Searches against the given host (for testing with mock servers).
pub(crate) fn search_products_from(
    base_url: &str,
    query: &str,
    page_size: u32,
) -> ApiResult<SearchResponse> {
    let url = format!("{}/cgi/search.pl", base_url);

    log::info!("Searching products for '{}' (page size {})", query, page_size);

    let response = reqwest::blocking::Client::new()
        .get(&url)
        .query(&[
            ("search_terms", query),
            ("search_simple", "1"),
            ("action", "process"),
            ("json", "1"),
        ])
        .query(&[("page_size", page_size)])
        .header("User-Agent", USER_AGENT)
        .send()?;

    if !response.status().is_success() {
        return Err(ApiError::HttpStatus(response.status()));
    }

    let body = response.text()?;
    Ok(serde_json::from_str::<SearchResponse>(&body)?)
}

#[cfg(test)]
#[path = "openfoodfacts_tests.rs"]
mod tests;
