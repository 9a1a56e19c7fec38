use crate::models::Listing;
use moka::future::Cache;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the listings API
#[derive(Debug, Error)]
pub enum ListingsApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

const SNAPSHOT_KEY: &str = "listings";
const DEFAULT_CACHE_TTL_SECS: u64 = 60;

/// Client for the remote listings API
///
/// Fetches the full listing collection from `GET {base}/listings`. The API
/// serves either a bare JSON array or a `{ "data": [...], "total": n }`
/// envelope; both are accepted, and Mongo-style `_id` fields are read as
/// `id`. Snapshots are cached for a short TTL so repeated searches do not
/// refetch the collection.
pub struct RemoteListingsClient {
    base_url: String,
    client: Client,
    snapshot_cache: Cache<&'static str, Arc<Vec<Listing>>>,
}

impl RemoteListingsClient {
    pub fn new(base_url: String, cache_ttl_secs: Option<u64>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let ttl = cache_ttl_secs.unwrap_or(DEFAULT_CACHE_TTL_SECS);
        let snapshot_cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(ttl))
            .build();

        Self {
            base_url,
            client,
            snapshot_cache,
        }
    }

    /// Fetch the current listing snapshot, serving from cache when fresh
    pub async fn snapshot(&self) -> Result<Vec<Listing>, ListingsApiError> {
        if let Some(cached) = self.snapshot_cache.get(SNAPSHOT_KEY).await {
            tracing::debug!("Serving {} listings from snapshot cache", cached.len());
            return Ok(cached.as_ref().clone());
        }

        let listings = self.fetch_listings().await?;
        self.snapshot_cache
            .insert(SNAPSHOT_KEY, Arc::new(listings.clone()))
            .await;
        Ok(listings)
    }

    async fn fetch_listings(&self) -> Result<Vec<Listing>, ListingsApiError> {
        let url = format!("{}/listings", self.base_url.trim_end_matches('/'));

        tracing::debug!("Fetching listings from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ListingsApiError::ApiError(format!(
                "Failed to fetch listings: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        // The API serves either a bare array or a {data, total} envelope
        let documents = if json.is_array() {
            json
        } else if let Some(data) = json.get("data").filter(|d| d.is_array()) {
            data.clone()
        } else {
            return Err(ListingsApiError::InvalidResponse(
                "Expected a listing array or a data envelope".into(),
            ));
        };

        let listings: Vec<Listing> = serde_json::from_value(documents)
            .map_err(|e| ListingsApiError::InvalidResponse(e.to_string()))?;

        tracing::info!("Fetched {} listings from the listings API", listings.len());

        Ok(listings)
    }
}
