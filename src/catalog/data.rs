//! Seed Catalog
//!
//! The static product catalog compiled into the binary. There is no backend:
//! this is the complete set of purchasable products for a session. Parsed
//! once on first access and shared as `Arc<Product>` entries so the cart and
//! every view hold references into the same immutable records.

use super::models::{Product, Review};
use serde::Deserialize;
use std::sync::{Arc, OnceLock};

/// Raw shape of the embedded seed file.
#[derive(Deserialize)]
struct Seed {
    products: Vec<Product>,
    reviews: Vec<Review>,
}

struct Catalog {
    products: Vec<Arc<Product>>,
    reviews: Vec<Review>,
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        // The seed file ships inside the crate; a parse failure is a build
        // defect, not a runtime condition.
        let seed: Seed = serde_json::from_str(include_str!("seed.json"))
            .expect("embedded seed.json parses");
        Catalog {
            products: seed.products.into_iter().map(Arc::new).collect(),
            reviews: seed.reviews,
        }
    })
}

/// All catalog products, in catalog (newest-first) order.
pub fn products() -> &'static [Arc<Product>] {
    &catalog().products
}

/// Looks up a product by id.
pub fn product_by_id(id: &str) -> Option<&'static Arc<Product>> {
    products().iter().find(|p| p.id == id)
}

/// All seeded reviews.
pub fn reviews() -> &'static [Review] {
    &catalog().reviews
}

/// Reviews attached to one product, for the detail page.
pub fn reviews_for(product_id: &str) -> Vec<&'static Review> {
    reviews()
        .iter()
        .filter(|r| r.product_id == product_id)
        .collect()
}
