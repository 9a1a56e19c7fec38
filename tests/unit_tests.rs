// Unit tests for Realty Search

use realty_search::core::{
    filters::{apply_filters, matches_criteria},
    pagination::{item_range, page_tokens, total_pages, PageToken},
};
use realty_search::models::{
    FilterCriteria, Listing, PriceRange, PropertyType, TransactionFilter, TransactionKind,
};

use PageToken::{Ellipsis, Page};

fn create_listing(
    id: &str,
    price: u64,
    kind: TransactionKind,
    city: &str,
    property_type: PropertyType,
    bedrooms: u32,
    bathrooms: u32,
    features: &[&str],
) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("Listing {}", id),
        price,
        transaction: kind,
        city: city.to_string(),
        neighborhood: "Center".to_string(),
        property_type,
        bedrooms,
        bathrooms,
        features: features.iter().map(|f| f.to_string()).collect(),
        description: None,
        area: None,
        featured: false,
        listed_at: None,
    }
}

fn mixed_listings() -> Vec<Listing> {
    vec![
        create_listing("1", 850_000, TransactionKind::Sale, "Beirut", PropertyType::Villa, 4, 3, &["Sea View", "Garden"]),
        create_listing("2", 2_500, TransactionKind::Rent, "Jounieh", PropertyType::Apartment, 3, 2, &["Sea View", "Balcony"]),
        create_listing("3", 1_200_000, TransactionKind::Sale, "Byblos", PropertyType::Villa, 5, 4, &["Pool", "Sea View"]),
        create_listing("4", 450_000, TransactionKind::Sale, "Batroun", PropertyType::House, 3, 2, &["Garden", "Terrace"]),
        create_listing("5", 3_200, TransactionKind::Rent, "Beirut", PropertyType::Apartment, 2, 2, &["City View", "Gym"]),
        create_listing("6", 320_000, TransactionKind::Sale, "Tripoli", PropertyType::House, 4, 3, &["Garden", "Parking"]),
        create_listing("7", 4_500, TransactionKind::Rent, "Beirut", PropertyType::Condo, 3, 3, &["Pool", "Gym"]),
        create_listing("8", 1_200, TransactionKind::Rent, "Saida", PropertyType::Apartment, 2, 1, &["Sea View"]),
    ]
}

#[test]
fn test_sale_filter_keeps_relative_order() {
    let listings = mixed_listings();
    let criteria = FilterCriteria {
        transaction: TransactionFilter::Sale,
        ..Default::default()
    };

    let filtered = apply_filters(&listings, &criteria);
    let ids: Vec<&str> = filtered.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "4", "6"]);
}

#[test]
fn test_all_clauses_conjoined() {
    let listings = mixed_listings();
    let criteria = FilterCriteria {
        transaction: TransactionFilter::Sale,
        city: Some("Byblos".to_string()),
        property_type: Some("Villa".to_string()),
        price_range: PriceRange::new(1_000_000, 1_500_000),
        min_bedrooms: Some(5),
        min_bathrooms: Some(4),
        features: vec!["Pool".to_string(), "Sea View".to_string()],
    };

    let filtered = apply_filters(&listings, &criteria);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "3");

    // A listing is in the result iff it satisfies every clause
    for listing in &listings {
        let expected = listing.transaction == TransactionKind::Sale
            && listing.city == "Byblos"
            && listing.property_type == PropertyType::Villa
            && (1_000_000..=1_500_000).contains(&listing.price)
            && listing.bedrooms >= 5
            && listing.bathrooms >= 4
            && listing.has_feature("Pool")
            && listing.has_feature("Sea View");
        assert_eq!(matches_criteria(listing, &criteria), expected, "id {}", listing.id);
    }
}

#[test]
fn test_empty_features_never_excludes() {
    let listings = mixed_listings();
    let without = apply_filters(&listings, &FilterCriteria::default());
    let with_empty = apply_filters(
        &listings,
        &FilterCriteria {
            features: vec![],
            ..Default::default()
        },
    );

    assert_eq!(without.len(), listings.len());
    assert_eq!(with_empty.len(), listings.len());
}

#[test]
fn test_refiltering_changes_nothing() {
    let listings = mixed_listings();
    let criteria = FilterCriteria {
        city: Some("Beirut".to_string()),
        ..Default::default()
    };

    let once = apply_filters(&listings, &criteria);
    let twice = apply_filters(&once, &criteria);

    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(twice.iter()) {
        assert_eq!(a.id, b.id);
    }
}

#[test]
fn test_inverted_price_range_is_empty_not_error() {
    let listings = mixed_listings();
    let criteria = FilterCriteria {
        price_range: PriceRange::new(500_000, 100_000),
        ..Default::default()
    };

    assert!(apply_filters(&listings, &criteria).is_empty());
}

#[test]
fn test_token_coverage_below_window_width() {
    for max_visible in [3, 5] {
        for total in 1..=max_visible {
            for current in 1..=total {
                let tokens = page_tokens(current, total, max_visible);
                assert_eq!(tokens.len(), total);
                for (i, token) in tokens.iter().enumerate() {
                    assert_eq!(token, &Page(i + 1));
                }
            }
        }
    }
}

#[test]
fn test_token_boundaries_above_window_width() {
    for total in [6, 10, 50, 1000] {
        for current in 1..=total {
            let tokens = page_tokens(current, total, 5);
            assert_eq!(tokens.first(), Some(&Page(1)), "total {} current {}", total, current);
            assert_eq!(tokens.last(), Some(&Page(total)), "total {} current {}", total, current);
        }
    }
}

#[test]
fn test_window_anchors_near_start() {
    assert_eq!(
        page_tokens(1, 10, 5),
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
    );
}

#[test]
fn test_window_anchors_near_end() {
    assert_eq!(
        page_tokens(10, 10, 5),
        vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
    );
}

#[test]
fn test_window_in_the_middle() {
    assert_eq!(
        page_tokens(5, 10, 5),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    );
}

#[test]
fn test_range_arithmetic_bounds() {
    for total in 1..=100 {
        let pages = total_pages(total, 9);
        for page in 1..=pages {
            let range = item_range(page, 9, total);
            assert!(range.end_item <= total);
            assert!(range.start_item <= range.end_item);
            assert!(range.start_item >= 1);
        }
    }
}

#[test]
fn test_range_exact_single_page() {
    let range = item_range(1, 9, 9);
    assert_eq!((range.start_item, range.end_item), (1, 9));
}
