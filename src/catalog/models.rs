//! Product Catalog Domain Models
//!
//! This module contains the immutable catalog records. Products are created
//! once at startup from the seed data and never mutated during a session;
//! every consumer (listing, detail page, cart) shares references into the
//! same entries.

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// A purchasable product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Current price in dollars, non-negative.
    pub price: f64,

    /// Pre-discount price; when present it is >= `price` and drives the
    /// strike-through / savings display.
    #[serde(default)]
    pub original_price: Option<f64>,

    /// Primary image shown on product cards.
    pub image: String,

    /// Category name, e.g. "Electronics".
    pub category: String,

    /// Brand name, e.g. "SoundTech".
    pub brand: String,

    /// Average rating, 0 to 5.
    pub rating: f64,

    /// Number of reviews behind the rating.
    pub review_count: u32,

    /// Short marketing description.
    pub description: String,

    /// Feature bullet points for the detail page.
    pub features: Vec<String>,

    /// Gallery images for the detail page.
    pub images: Vec<String>,

    /// Whether the product can currently be purchased. Display concern
    /// only: the cart does not enforce it.
    pub in_stock: bool,

    /// Size variants, when the product comes in sizes.
    #[serde(default)]
    pub sizes: Option<Vec<String>>,

    /// Color variants, when the product comes in colors.
    #[serde(default)]
    pub colors: Option<Vec<String>>,
}

impl Product {
    /// True when the product carries a pre-discount price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some()
    }

    /// Discount as a whole percentage, when on sale.
    pub fn discount_percent(&self) -> Option<u8> {
        self.original_price.map(|original| {
            if original <= 0.0 {
                0
            } else {
                (((original - self.price) / original) * 100.0).round() as u8
            }
        })
    }
}

/// A customer review attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    /// ISO date the review was left, e.g. "2024-01-15".
    pub date: String,
    /// Verified-purchase badge.
    pub verified: bool,
}
