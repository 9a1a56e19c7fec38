use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default price bounds applied when the caller has not constrained price
pub const DEFAULT_MIN_PRICE: u64 = 0;
pub const DEFAULT_MAX_PRICE: u64 = 2_000_000;

/// A single property listing as served by the listings API
///
/// Listings are immutable once loaded; the search core never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub price: u64,
    #[serde(rename = "priceType")]
    pub transaction: TransactionKind,
    pub city: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(rename = "propertyType")]
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub area: Option<u32>,
    #[serde(default)]
    pub featured: bool,
    #[serde(rename = "listedAt", default)]
    pub listed_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Listing {
    /// Whether the listing carries the given feature (exact match)
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

/// Whether a listing is offered for sale or for rent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Sale,
    Rent,
}

/// Transaction filter selected by the caller: both kinds, or one of them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionFilter {
    #[default]
    All,
    Sale,
    Rent,
}

impl TransactionFilter {
    /// True when a listing of the given kind passes this filter
    #[inline]
    pub fn accepts(&self, kind: TransactionKind) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Sale => kind == TransactionKind::Sale,
            TransactionFilter::Rent => kind == TransactionKind::Rent,
        }
    }
}

impl FromStr for TransactionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(TransactionFilter::All),
            "sale" => Ok(TransactionFilter::Sale),
            "rent" => Ok(TransactionFilter::Rent),
            other => Err(format!("unknown listing type: {}", other)),
        }
    }
}

/// Closed set of property types in the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Villa,
    Condo,
    Townhouse,
    Land,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Land => "land",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive price bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PRICE,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

/// Filter criteria for a listing search
///
/// A plain value object: the caller owns it, the filter engine only reads it.
/// All clauses are conjoined; unset optional clauses impose no constraint.
/// City matching is case-sensitive (canonical casing comes from the data),
/// property-type matching is case-insensitive. That asymmetry mirrors the
/// live marketplace behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub transaction: TransactionFilter,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(rename = "propertyType", default)]
    pub property_type: Option<String>,
    #[serde(rename = "priceRange", default)]
    pub price_range: PriceRange,
    #[serde(rename = "minBedrooms", default)]
    pub min_bedrooms: Option<u32>,
    #[serde(rename = "minBathrooms", default)]
    pub min_bathrooms: Option<u32>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Distinct facet values present in a listing snapshot, for filter controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facets {
    pub cities: Vec<String>,
    #[serde(rename = "propertyTypes")]
    pub property_types: Vec<String>,
    pub features: Vec<String>,
}

impl Facets {
    /// Collect sorted, de-duplicated facet values from a snapshot
    pub fn collect(listings: &[Listing]) -> Self {
        let mut cities: Vec<String> = Vec::new();
        let mut property_types: Vec<String> = Vec::new();
        let mut features: Vec<String> = Vec::new();

        for listing in listings {
            if !cities.contains(&listing.city) {
                cities.push(listing.city.clone());
            }
            let property_type = listing.property_type.to_string();
            if !property_types.contains(&property_type) {
                property_types.push(property_type);
            }
            for feature in &listing.features {
                if !features.contains(feature) {
                    features.push(feature.clone());
                }
            }
        }

        cities.sort();
        property_types.sort();
        features.sort();

        Self {
            cities,
            property_types,
            features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, city: &str, property_type: PropertyType) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("Listing {}", id),
            price: 100_000,
            transaction: TransactionKind::Sale,
            city: city.to_string(),
            neighborhood: String::new(),
            property_type,
            bedrooms: 2,
            bathrooms: 1,
            features: vec!["Parking".to_string()],
            description: None,
            area: None,
            featured: false,
            listed_at: None,
        }
    }

    #[test]
    fn test_transaction_filter_accepts() {
        assert!(TransactionFilter::All.accepts(TransactionKind::Sale));
        assert!(TransactionFilter::All.accepts(TransactionKind::Rent));
        assert!(TransactionFilter::Sale.accepts(TransactionKind::Sale));
        assert!(!TransactionFilter::Sale.accepts(TransactionKind::Rent));
        assert!(!TransactionFilter::Rent.accepts(TransactionKind::Sale));
    }

    #[test]
    fn test_transaction_filter_parse() {
        assert_eq!("all".parse::<TransactionFilter>(), Ok(TransactionFilter::All));
        assert_eq!("sale".parse::<TransactionFilter>(), Ok(TransactionFilter::Sale));
        assert_eq!("rent".parse::<TransactionFilter>(), Ok(TransactionFilter::Rent));
        assert!("lease".parse::<TransactionFilter>().is_err());
    }

    #[test]
    fn test_default_price_range() {
        let range = PriceRange::default();
        assert_eq!(range.min, 0);
        assert_eq!(range.max, 2_000_000);
        assert!(range.contains(0));
        assert!(range.contains(2_000_000));
        assert!(!range.contains(2_000_001));
    }

    #[test]
    fn test_listing_accepts_mongo_style_id() {
        let json = r#"{
            "_id": "abc123",
            "title": "Test",
            "price": 1000,
            "priceType": "rent",
            "city": "Beirut",
            "propertyType": "apartment",
            "bedrooms": 1,
            "bathrooms": 1
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, "abc123");
        assert_eq!(listing.transaction, TransactionKind::Rent);
        assert_eq!(listing.property_type, PropertyType::Apartment);
        assert!(listing.features.is_empty());
    }

    #[test]
    fn test_facets_sorted_and_deduplicated() {
        let listings = vec![
            listing("1", "Jounieh", PropertyType::Apartment),
            listing("2", "Beirut", PropertyType::Villa),
            listing("3", "Beirut", PropertyType::Apartment),
        ];

        let facets = Facets::collect(&listings);
        assert_eq!(facets.cities, vec!["Beirut", "Jounieh"]);
        assert_eq!(facets.property_types, vec!["apartment", "villa"]);
        assert_eq!(facets.features, vec!["Parking"]);
    }
}
