use serde::{Deserialize, Serialize};

use crate::core::{ItemRange, PageToken, SearchResult};
use crate::models::domain::{Facets, Listing};

/// Response for the listing search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchListingsResponse {
    pub listings: Vec<Listing>,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
    pub page: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    /// Tokens for the pagination controls; empty when they are hidden
    #[serde(rename = "pageTokens")]
    pub page_tokens: Vec<PageToken>,
    /// The "showing X - Y of Z" range; absent when nothing matched
    #[serde(rename = "shownRange", skip_serializing_if = "Option::is_none")]
    pub shown_range: Option<ItemRange>,
}

impl From<SearchResult> for SearchListingsResponse {
    fn from(result: SearchResult) -> Self {
        Self {
            listings: result.listings,
            total_matches: result.total_matches,
            page: result.page,
            total_pages: result.total_pages,
            page_tokens: result.tokens,
            shown_range: result.range,
        }
    }
}

/// Response for the facets endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingFacetsResponse {
    #[serde(flatten)]
    pub facets: Facets,
    #[serde(rename = "totalListings")]
    pub total_listings: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
