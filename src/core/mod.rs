// Core algorithm exports
pub mod filters;
pub mod pagination;
pub mod search;

pub use filters::{apply_filters, matches_criteria};
pub use pagination::{item_range, page_tokens, total_pages, ItemRange, PageToken};
pub use search::{SearchEngine, SearchResult, SearchSession};
