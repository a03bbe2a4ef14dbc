use crate::api::DEFAULT_PAGE_SIZE;
use crate::models::ProductRow;

/// State of the search screen. The result set lives here for exactly one
/// query; the next search resets it before dispatching.
pub struct SearchState {
    pub query_input: String,
    pub rows: Vec<ProductRow>,
    pub selected: Option<usize>,
    pub page_size: u32,
    /// Normal non-result outcomes ("Product not found." etc.)
    pub notice: Option<String>,
    /// Request failure text, shown in red
    pub error: Option<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query_input: String::new(),
            rows: Vec::new(),
            selected: None,
            page_size: DEFAULT_PAGE_SIZE,
            notice: None,
            error: None,
        }
    }
}
