//! Realty Search - listing search service for the Realty property marketplace
//!
//! This library provides the search core used by the marketplace listings
//! page: conjunctive filtering over a listing snapshot and the windowed
//! pagination controls, plus the HTTP service layer around them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    apply_filters, item_range, matches_criteria, page_tokens, total_pages, ItemRange,
    PageToken, SearchEngine, SearchResult, SearchSession,
};
pub use crate::models::{
    Facets, FilterCriteria, Listing, PriceRange, PropertyType, TransactionFilter,
    TransactionKind,
};
