use crate::config::ListingsSettings;
use crate::models::Listing;
use crate::services::dataset::LocalDataset;
use crate::services::remote::{ListingsApiError, RemoteListingsClient};
use thiserror::Error;

/// Errors from the listings provider layer
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("listings source {0:?} is not supported (expected \"local\" or \"remote\")")]
    UnknownSource(String),

    #[error("listings.endpoint is required when listings.source = \"remote\"")]
    MissingEndpoint,

    #[error(transparent)]
    Api(#[from] ListingsApiError),
}

/// Where listing snapshots come from: the built-in dataset or a listings API
pub enum ListingsProvider {
    Local(LocalDataset),
    Remote(RemoteListingsClient),
}

impl ListingsProvider {
    /// Build a provider from the configured listings source
    pub fn from_settings(settings: &ListingsSettings) -> Result<Self, ProviderError> {
        match settings.source.as_str() {
            "local" => Ok(ListingsProvider::Local(LocalDataset::seed())),
            "remote" => {
                let endpoint = settings
                    .endpoint
                    .clone()
                    .ok_or(ProviderError::MissingEndpoint)?;
                Ok(ListingsProvider::Remote(RemoteListingsClient::new(
                    endpoint,
                    settings.cache_ttl_secs,
                )))
            }
            other => Err(ProviderError::UnknownSource(other.to_string())),
        }
    }

    /// Fetch the current listing snapshot
    pub async fn snapshot(&self) -> Result<Vec<Listing>, ProviderError> {
        match self {
            ListingsProvider::Local(dataset) => Ok(dataset.snapshot()),
            ListingsProvider::Remote(client) => Ok(client.snapshot().await?),
        }
    }

    /// Human-readable source name for logging
    pub fn describe(&self) -> &'static str {
        match self {
            ListingsProvider::Local(_) => "local dataset",
            ListingsProvider::Remote(_) => "remote listings API",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_provider_from_defaults() {
        let provider = ListingsProvider::from_settings(&ListingsSettings::default()).unwrap();
        assert_eq!(provider.describe(), "local dataset");
    }

    #[test]
    fn test_remote_provider_requires_endpoint() {
        let settings = ListingsSettings {
            source: "remote".to_string(),
            endpoint: None,
            cache_ttl_secs: None,
        };
        let result = ListingsProvider::from_settings(&settings);
        assert!(matches!(result, Err(ProviderError::MissingEndpoint)));
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        let settings = ListingsSettings {
            source: "s3".to_string(),
            endpoint: None,
            cache_ttl_secs: None,
        };
        let result = ListingsProvider::from_settings(&settings);
        assert!(matches!(result, Err(ProviderError::UnknownSource(_))));
    }

    #[tokio::test]
    async fn test_local_snapshot() {
        let provider = ListingsProvider::Local(LocalDataset::seed());
        let snapshot = provider.snapshot().await.unwrap();
        assert_eq!(snapshot.len(), 8);
    }
}
