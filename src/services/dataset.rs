use crate::models::{Listing, PropertyType, TransactionKind};

/// Built-in listing dataset
///
/// Serves the same sample inventory the marketplace ships with, so the
/// service runs end-to-end without a listings API. Featured listings come
/// first; the search core preserves that order.
#[derive(Debug, Clone)]
pub struct LocalDataset {
    listings: Vec<Listing>,
}

impl LocalDataset {
    pub fn seed() -> Self {
        Self {
            listings: seed_listings(),
        }
    }

    /// Current snapshot of the dataset
    pub fn snapshot(&self) -> Vec<Listing> {
        self.listings.clone()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl Default for LocalDataset {
    fn default() -> Self {
        Self::seed()
    }
}

fn listing(
    id: &str,
    title: &str,
    price: u64,
    transaction: TransactionKind,
    city: &str,
    neighborhood: &str,
    property_type: PropertyType,
    bedrooms: u32,
    bathrooms: u32,
    area: u32,
    features: &[&str],
    featured: bool,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        price,
        transaction,
        city: city.to_string(),
        neighborhood: neighborhood.to_string(),
        property_type,
        bedrooms,
        bathrooms,
        features: features.iter().map(|f| f.to_string()).collect(),
        description: None,
        area: Some(area),
        featured,
        listed_at: None,
    }
}

fn seed_listings() -> Vec<Listing> {
    vec![
        listing(
            "1",
            "Luxury Villa in Achrafieh",
            850_000,
            TransactionKind::Sale,
            "Beirut",
            "Achrafieh",
            PropertyType::Villa,
            4,
            3,
            3200,
            &[
                "Sea View",
                "Garden",
                "Parking",
                "Balcony",
                "Modern Kitchen",
                "Central AC",
                "Security System",
            ],
            true,
        ),
        listing(
            "2",
            "Modern Apartment in Maameltein",
            2_500,
            TransactionKind::Rent,
            "Jounieh",
            "Maameltein",
            PropertyType::Apartment,
            3,
            2,
            1800,
            &["Sea View", "Balcony", "Elevator", "Parking", "Storage", "Gym"],
            true,
        ),
        listing(
            "3",
            "Beachfront Property in Byblos",
            1_200_000,
            TransactionKind::Sale,
            "Byblos",
            "Old Souk",
            PropertyType::Villa,
            5,
            4,
            4500,
            &[
                "Beach Access",
                "Pool",
                "Garden",
                "Sea View",
                "Parking",
                "Terrace",
                "BBQ Area",
                "Modern Kitchen",
            ],
            true,
        ),
        listing(
            "4",
            "Spacious House in Batroun",
            450_000,
            TransactionKind::Sale,
            "Batroun",
            "Downtown",
            PropertyType::House,
            3,
            2,
            2200,
            &["Garden", "Mountain View", "Parking", "Terrace", "Storage"],
            false,
        ),
        listing(
            "5",
            "Downtown Beirut Apartment",
            3_200,
            TransactionKind::Rent,
            "Beirut",
            "Downtown",
            PropertyType::Apartment,
            2,
            2,
            1500,
            &[
                "City View",
                "Balcony",
                "Elevator",
                "Parking",
                "Concierge",
                "Gym",
                "Security",
            ],
            false,
        ),
        listing(
            "6",
            "Tripoli Family Home",
            320_000,
            TransactionKind::Sale,
            "Tripoli",
            "Mina",
            PropertyType::House,
            4,
            3,
            2800,
            &["Garden", "Parking", "Storage", "Balcony"],
            false,
        ),
        listing(
            "7",
            "Luxury Condo in Verdun",
            4_500,
            TransactionKind::Rent,
            "Beirut",
            "Verdun",
            PropertyType::Condo,
            3,
            3,
            2100,
            &[
                "City View",
                "Pool",
                "Gym",
                "Elevator",
                "Parking",
                "Concierge",
                "Smart Home",
                "Modern Kitchen",
            ],
            false,
        ),
        listing(
            "8",
            "Cozy Apartment in Saida",
            1_200,
            TransactionKind::Rent,
            "Saida",
            "Sea Road",
            PropertyType::Apartment,
            2,
            1,
            1100,
            &["Sea View", "Balcony", "Parking"],
            false,
        ),
    ]
}
