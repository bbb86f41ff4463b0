//! Error types for the storefront core.

use thiserror::Error;

/// Errors the core can report to callers.
///
/// The taxonomy is deliberately small: the core performs no I/O, so the only
/// failures are invalid arguments. Missing-line operations on the cart are
/// no-ops rather than errors (double-click removes must not crash the
/// session).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// A non-positive quantity was passed to an add operation.
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// A price range whose minimum exceeds its maximum.
    #[error("invalid price range: min {min} is greater than max {max}")]
    InvalidPriceRange { min: f64, max: f64 },
}
