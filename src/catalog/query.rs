//! Catalog Query Engine
//!
//! The filtering/sorting pipeline behind the product listing. `query` is a
//! pure function: it never mutates the catalog and the same inputs always
//! produce the same output, so the listing UI can recompute the visible
//! list on every filter change.

use super::models::Product;
use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Sort mode for the listing dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Most reviewed first. The listing default.
    #[default]
    Popular,
    /// Catalog order (the catalog is maintained newest-first).
    Newest,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Highest rated first.
    Rating,
}

impl SortOption {
    pub fn from_str(s: &str) -> Self {
        match s {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "rating" => Self::Rating,
            "newest" => Self::Newest,
            _ => Self::Popular,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Newest => "newest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Popular => "Most Popular",
            Self::Newest => "Newest",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Highest Rated",
        }
    }
}

/// Filter parameters owned by the listing view.
///
/// Ephemeral UI state: constructed per listing mount, consumed by [`query`].
/// Empty brand/category sets mean "no restriction"; the default price range
/// is unbounded so a default `FilterState` matches the whole catalog.
#[derive(Debug, Clone)]
pub struct FilterState {
    /// Free-text search over name, description and brand.
    pub search: String,
    /// Inclusive (min, max) price bounds.
    pub price_range: (f64, f64),
    /// Selected brands; empty = all brands.
    pub brands: HashSet<String>,
    /// Selected categories; empty = all categories.
    pub categories: HashSet<String>,
    /// Minimum rating, 0 = no floor.
    pub min_rating: f64,
    /// Sort mode applied after filtering.
    pub sort: SortOption,
    /// Optional result-count cap, applied after sorting.
    pub limit: Option<usize>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            price_range: (0.0, f64::MAX),
            brands: HashSet::new(),
            categories: HashSet::new(),
            min_rating: 0.0,
            sort: SortOption::default(),
            limit: None,
        }
    }
}

/// Runs the filter/sort pipeline over the catalog.
///
/// Stages, each narrowing the previous one:
/// 1. case-insensitive substring search over name/description/brand
/// 2. inclusive price range
/// 3. brand set
/// 4. category set
/// 5. rating floor
/// 6. stable sort per [`SortOption`]
/// 7. optional result cap
///
/// Rejects a range whose minimum exceeds its maximum with
/// [`StoreError::InvalidPriceRange`].
pub fn query(
    catalog: &[Arc<Product>],
    filters: &FilterState,
) -> Result<Vec<Arc<Product>>, StoreError> {
    let (min_price, max_price) = filters.price_range;
    if min_price > max_price {
        return Err(StoreError::InvalidPriceRange {
            min: min_price,
            max: max_price,
        });
    }

    let needle = filters.search.to_lowercase();

    let mut results: Vec<Arc<Product>> = catalog
        .iter()
        .filter(|p| {
            let matches_search = needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.brand.to_lowercase().contains(&needle);

            let matches_price = p.price >= min_price && p.price <= max_price;
            let matches_brand = filters.brands.is_empty() || filters.brands.contains(&p.brand);
            let matches_category =
                filters.categories.is_empty() || filters.categories.contains(&p.category);
            let matches_rating = p.rating >= filters.min_rating;

            matches_search && matches_price && matches_brand && matches_category && matches_rating
        })
        .cloned()
        .collect();

    // Vec::sort_by is stable, so equal keys keep their catalog order; the
    // listing keys its incremental updates on product identity and relies
    // on that.
    match filters.sort {
        SortOption::PriceLow => results.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOption::PriceHigh => results.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOption::Rating => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        // Catalog order already is newest-first.
        SortOption::Newest => {}
        SortOption::Popular => results.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
    }

    if let Some(limit) = filters.limit {
        results.truncate(limit);
    }

    Ok(results)
}

/// Unique brand names in first-appearance order, for the filter panel.
pub fn distinct_brands(catalog: &[Arc<Product>]) -> Vec<String> {
    let mut brands = Vec::new();
    for p in catalog {
        if !brands.contains(&p.brand) {
            brands.push(p.brand.clone());
        }
    }
    brands
}

/// Unique category names in first-appearance order, for the filter panel.
pub fn distinct_categories(catalog: &[Arc<Product>]) -> Vec<String> {
    let mut categories = Vec::new();
    for p in catalog {
        if !categories.contains(&p.category) {
            categories.push(p.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Arc<Product> {
        Arc::new(Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            price,
            original_price: None,
            image: String::new(),
            category: "Electronics".to_string(),
            brand: "SoundTech".to_string(),
            rating: 4.0,
            review_count: 0,
            description: String::new(),
            features: vec![],
            images: vec![],
            in_stock: true,
            sizes: None,
            colors: None,
        })
    }

    fn with<F: FnOnce(&mut Product)>(base: Arc<Product>, f: F) -> Arc<Product> {
        let mut p = (*base).clone();
        f(&mut p);
        Arc::new(p)
    }

    fn ids(results: &[Arc<Product>]) -> Vec<String> {
        results.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_price_range_keeps_catalog_order() {
        let catalog = vec![product("a", 10.0), product("b", 50.0), product("c", 100.0)];
        let filters = FilterState {
            price_range: (20.0, 100.0),
            sort: SortOption::Newest,
            ..Default::default()
        };

        let results = query(&catalog, &filters).unwrap();
        assert_eq!(ids(&results), vec!["b", "c"]);
    }

    #[test]
    fn test_price_range_bounds_are_inclusive() {
        let catalog = vec![product("a", 20.0), product("b", 100.0)];
        let filters = FilterState {
            price_range: (20.0, 100.0),
            ..Default::default()
        };

        assert_eq!(query(&catalog, &filters).unwrap().len(), 2);
    }

    #[test]
    fn test_sort_price_ascending() {
        let catalog = vec![product("a", 50.0), product("b", 10.0), product("c", 100.0)];
        let filters = FilterState {
            sort: SortOption::PriceLow,
            ..Default::default()
        };

        let results = query(&catalog, &filters).unwrap();
        let prices: Vec<f64> = results.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![10.0, 50.0, 100.0]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_prices() {
        let catalog = vec![
            product("first", 25.0),
            product("cheap", 10.0),
            product("second", 25.0),
        ];
        let filters = FilterState {
            sort: SortOption::PriceLow,
            ..Default::default()
        };

        let results = query(&catalog, &filters).unwrap();
        assert_eq!(ids(&results), vec!["cheap", "first", "second"]);
    }

    #[test]
    fn test_empty_filters_return_full_catalog() {
        let catalog = vec![product("a", 10.0), product("b", 2000.0)];
        let filters = FilterState {
            sort: SortOption::Newest,
            ..Default::default()
        };

        let results = query(&catalog, &filters).unwrap();
        assert_eq!(results.len(), 2, "default price range is unbounded");
    }

    #[test]
    fn test_cap_applies_after_sorting() {
        let catalog = vec![product("a", 50.0), product("b", 10.0), product("c", 100.0)];
        let filters = FilterState {
            sort: SortOption::PriceLow,
            limit: Some(2),
            ..Default::default()
        };

        let results = query(&catalog, &filters).unwrap();
        assert_eq!(ids(&results), vec!["b", "a"]);
    }

    #[test]
    fn test_search_matches_name_description_and_brand() {
        let catalog = vec![
            with(product("by-name", 1.0), |p| p.name = "Trail Shoes".into()),
            with(product("by-desc", 1.0), |p| {
                p.description = "perfect for the trail".into()
            }),
            with(product("by-brand", 1.0), |p| p.brand = "TrailWorks".into()),
            product("no-match", 1.0),
        ];
        let filters = FilterState {
            search: "TRAIL".to_string(),
            sort: SortOption::Newest,
            ..Default::default()
        };

        let results = query(&catalog, &filters).unwrap();
        assert_eq!(ids(&results), vec!["by-name", "by-desc", "by-brand"]);
    }

    #[test]
    fn test_brand_and_category_sets_restrict_only_when_non_empty() {
        let catalog = vec![
            with(product("a", 1.0), |p| {
                p.brand = "SoundTech".into();
                p.category = "Electronics".into();
            }),
            with(product("b", 1.0), |p| {
                p.brand = "TimeCore".into();
                p.category = "Accessories".into();
            }),
        ];

        let mut filters = FilterState::default();
        assert_eq!(query(&catalog, &filters).unwrap().len(), 2);

        filters.brands.insert("TimeCore".to_string());
        assert_eq!(ids(&query(&catalog, &filters).unwrap()), vec!["b"]);

        filters.brands.clear();
        filters.categories.insert("Electronics".to_string());
        assert_eq!(ids(&query(&catalog, &filters).unwrap()), vec!["a"]);
    }

    #[test]
    fn test_rating_floor() {
        let catalog = vec![
            with(product("low", 1.0), |p| p.rating = 3.2),
            with(product("high", 1.0), |p| p.rating = 4.6),
        ];
        let filters = FilterState {
            min_rating: 4.0,
            ..Default::default()
        };

        assert_eq!(ids(&query(&catalog, &filters).unwrap()), vec!["high"]);
    }

    #[test]
    fn test_popular_sort_by_review_count_desc() {
        let catalog = vec![
            with(product("quiet", 1.0), |p| p.review_count = 3),
            with(product("loud", 1.0), |p| p.review_count = 200),
        ];

        let results = query(&catalog, &FilterState::default()).unwrap();
        assert_eq!(ids(&results), vec!["loud", "quiet"]);
    }

    #[test]
    fn test_inverted_price_range_is_rejected() {
        let catalog = vec![product("a", 10.0)];
        let filters = FilterState {
            price_range: (100.0, 20.0),
            ..Default::default()
        };

        let err = query(&catalog, &filters).unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidPriceRange {
                min: 100.0,
                max: 20.0
            }
        );
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let results = query(&[], &FilterState::default()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_distinct_facets_keep_first_appearance_order() {
        let catalog = vec![
            with(product("1", 1.0), |p| p.brand = "B".into()),
            with(product("2", 1.0), |p| p.brand = "A".into()),
            with(product("3", 1.0), |p| p.brand = "B".into()),
        ];

        assert_eq!(distinct_brands(&catalog), vec!["B", "A"]);
        assert_eq!(distinct_categories(&catalog), vec!["Electronics"]);
    }

    #[test]
    fn test_sort_option_round_trips_wire_strings() {
        for sort in [
            SortOption::Popular,
            SortOption::Newest,
            SortOption::PriceLow,
            SortOption::PriceHigh,
            SortOption::Rating,
        ] {
            assert_eq!(SortOption::from_str(sort.as_str()), sort);
        }
        assert_eq!(SortOption::from_str("garbage"), SortOption::Popular);
    }
}
