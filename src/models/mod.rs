// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Facets, FilterCriteria, Listing, PriceRange, PropertyType, TransactionFilter,
    TransactionKind, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE,
};
pub use requests::SearchListingsRequest;
pub use responses::{ErrorResponse, HealthResponse, ListingFacetsResponse, SearchListingsResponse};
