//! Product Catalog Domain Module
//!
//! This module contains everything catalog-side, including:
//! - Domain models (Product, Review)
//! - The compiled-in seed catalog
//! - The filtering/sorting query engine

pub mod data;
pub mod models;
pub mod query;

// Re-export commonly used types for convenience
pub use models::{Product, Review};
pub use query::{distinct_brands, distinct_categories, query, FilterState, SortOption};
