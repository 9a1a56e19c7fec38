// Service exports
pub mod dataset;
pub mod provider;
pub mod remote;

pub use dataset::LocalDataset;
pub use provider::{ListingsProvider, ProviderError};
pub use remote::{ListingsApiError, RemoteListingsClient};
