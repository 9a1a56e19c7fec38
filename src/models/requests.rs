use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{FilterCriteria, PriceRange, TransactionFilter};

/// Query parameters for the listing search endpoint
///
/// Parameter names match what the marketplace front end sends:
/// `?listing_type=sale&city=Beirut&propertyType=villa&minPrice=...&features=a,b&page=2`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchListingsRequest {
    #[serde(default)]
    pub listing_type: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(alias = "property_type", rename = "propertyType", default)]
    pub property_type: Option<String>,
    #[serde(alias = "min_price", rename = "minPrice", default)]
    pub min_price: Option<u64>,
    #[serde(alias = "max_price", rename = "maxPrice", default)]
    pub max_price: Option<u64>,
    #[serde(alias = "min_bedrooms", rename = "minBedrooms", default)]
    pub min_bedrooms: Option<u32>,
    #[serde(alias = "min_bathrooms", rename = "minBathrooms", default)]
    pub min_bathrooms: Option<u32>,
    /// Comma-joined list of required features
    #[serde(default)]
    pub features: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: usize,
    /// Width of the page-number control: 3 on narrow viewports, 5 on wide
    #[validate(range(min = 3, max = 15))]
    #[serde(alias = "max_visible", rename = "maxVisible", default)]
    pub max_visible: Option<usize>,
}

fn default_page() -> usize {
    1
}

impl SearchListingsRequest {
    /// Parse the transaction filter; `None`/empty means both kinds
    pub fn transaction_filter(&self) -> Result<TransactionFilter, String> {
        match self.listing_type.as_deref() {
            None => Ok(TransactionFilter::All),
            Some(value) => value.parse(),
        }
    }

    /// Build filter criteria, falling back to the configured price bounds
    /// where the request leaves them open
    pub fn to_criteria(&self, defaults: PriceRange) -> Result<FilterCriteria, String> {
        let features = self
            .features
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();

        Ok(FilterCriteria {
            transaction: self.transaction_filter()?,
            city: self.city.clone().filter(|c| !c.is_empty()),
            property_type: self.property_type.clone().filter(|p| !p.is_empty()),
            price_range: PriceRange::new(
                self.min_price.unwrap_or(defaults.min),
                self.max_price.unwrap_or(defaults.max),
            ),
            min_bedrooms: self.min_bedrooms,
            min_bathrooms: self.min_bathrooms,
            features,
        })
    }
}

impl Default for SearchListingsRequest {
    fn default() -> Self {
        Self {
            listing_type: None,
            city: None,
            property_type: None,
            min_price: None,
            max_price: None,
            min_bedrooms: None,
            min_bathrooms: None,
            features: None,
            page: 1,
            max_visible: None,
        }
    }
}
