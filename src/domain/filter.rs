// src/domain/filter.rs

use crate::domain::{Criteria, Property};

/// Derives the visible listings from the full collection.
///
/// A property survives when it passes all three checks:
/// - the search term is empty or appears (case-insensitively) in its title,
///   description or location;
/// - its price lies within the range, both ends inclusive;
/// - no bedroom filter is set, or its bedroom count equals the filter exactly.
///
/// Source order is preserved. An inverted price range matches nothing.
pub fn filter_properties(all: &[Property], criteria: &Criteria) -> Vec<Property> {
    let needle = criteria.search_term.to_lowercase();

    all.iter()
        .filter(|p| p.mentions(&needle))
        .filter(|p| criteria.price_range.contains(p.price))
        .filter(|p| criteria.bedrooms.map_or(true, |n| p.bedrooms == n))
        .cloned()
        .collect()
}
