use crate::models::{FilterCriteria, Listing};

/// Check if a listing satisfies every clause of the filter criteria
///
/// All clauses are conjoined; an unset optional clause imposes no constraint.
#[inline]
pub fn matches_criteria(listing: &Listing, criteria: &FilterCriteria) -> bool {
    // Sale/rent filter
    if !criteria.transaction.accepts(listing.transaction) {
        return false;
    }

    // City: exact, case-sensitive match against the data's canonical casing
    if let Some(city) = criteria.city.as_deref() {
        if !city.is_empty() && listing.city != city {
            return false;
        }
    }

    // Property type: case-insensitive match against the closed type set
    if let Some(property_type) = criteria.property_type.as_deref() {
        if !property_type.is_empty()
            && !listing.property_type.as_str().eq_ignore_ascii_case(property_type)
        {
            return false;
        }
    }

    // Inclusive price bounds; an inverted range matches nothing
    if !criteria.price_range.contains(listing.price) {
        return false;
    }

    // Room lower bounds
    if let Some(min_bedrooms) = criteria.min_bedrooms {
        if listing.bedrooms < min_bedrooms {
            return false;
        }
    }
    if let Some(min_bathrooms) = criteria.min_bathrooms {
        if listing.bathrooms < min_bathrooms {
            return false;
        }
    }

    // Required features: the listing must carry every one of them
    if !criteria.features.iter().all(|f| listing.has_feature(f)) {
        return false;
    }

    true
}

/// Filter a listing collection, preserving the input order
///
/// A stable filter: upstream ordering (featured listings first) survives.
/// Pure and idempotent; an empty result is a valid outcome, not an error.
pub fn apply_filters(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| matches_criteria(listing, criteria))
        .cloned()
        .collect()
}
