//! Shopping Cart Domain Models
//!
//! This module contains the data structures of the shopping cart
//! business domain.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for cart lines
fn default_quantity() -> u32 {
    1
}

/// One entry in the cart: a product plus a specific variant selection and
/// quantity.
///
/// The `id` is derived deterministically from the product id and the
/// selected size/color (see [`super::helpers::line_id`]), so re-adding the
/// same product+variant combination merges into the existing line instead of
/// creating a duplicate.
///
/// The product reference is shared and read-only; the cart never mutates
/// catalog data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Line identity: `"{productId}-{size}-{color}"` with empty strings for
    /// unselected variants.
    pub id: String,

    /// The catalog entry this line refers to.
    pub product: Arc<Product>,

    /// Number of units, always >= 1 (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Selected size variant, when the product has sizes.
    #[serde(default)]
    pub selected_size: Option<String>,

    /// Selected color variant, when the product has colors.
    #[serde(default)]
    pub selected_color: Option<String>,
}

impl CartLine {
    /// Price contribution of this line: unit price times quantity.
    ///
    /// Unrounded; rounding happens at display time only.
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}
