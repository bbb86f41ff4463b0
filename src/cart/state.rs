//! Shopping Cart State Management
//!
//! This module implements the cart state manager: line storage keyed by the
//! composite variant identity, mutation operations, and the derived
//! aggregates the cart panel and checkout summary read.

use super::helpers::line_id;
use super::models::CartLine;
use crate::catalog::Product;
use crate::error::StoreError;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// =============================================================================
// Cart Store
// =============================================================================

/// Shared cart handle that can be safely passed between components
pub type SharedCart = Arc<CartStore>;

/// A line as stored: the public model plus its insertion sequence, which
/// keeps `lines()` in first-added order for rendering.
struct StoredLine {
    seq: u64,
    line: CartLine,
}

/// The shopping-cart state manager.
///
/// Constructed explicitly and passed by reference to whatever needs it —
/// there is no ambient global cart. Every mutation is synchronously visible
/// to the next read; aggregates are recomputed from line state on every
/// call, never cached.
pub struct CartStore {
    /// In-memory storage for cart lines, keyed by line id.
    /// DashMap allows concurrent access without external Mutexes.
    lines: DashMap<String, StoredLine>,

    /// Monotonic counter stamping each new line with its display position.
    next_seq: AtomicU64,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self {
            lines: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Adds `quantity` units of a product with the given variant selection.
    ///
    /// If a line for the same (product, size, color) combination already
    /// exists its quantity is increased; otherwise a new line is created.
    /// Returns the line id either way.
    ///
    /// A zero quantity is rejected with [`StoreError::InvalidQuantity`]
    /// before any state is touched. The store does not check product stock:
    /// the detail page disables its button for out-of-stock items, and that
    /// UI-level prevention is the only guard (product-policy decision,
    /// revisit if carts must never hold unavailable items).
    pub fn add_item(
        &self,
        product: &Arc<Product>,
        quantity: u32,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Result<String, StoreError> {
        if quantity == 0 {
            return Err(StoreError::InvalidQuantity);
        }

        let id = line_id(&product.id, size, color);
        match self.lines.entry(id.clone()) {
            Entry::Occupied(mut occupied) => {
                // Aggregate quantities.
                occupied.get_mut().line.quantity += quantity;
            }
            Entry::Vacant(vacant) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                vacant.insert(StoredLine {
                    seq,
                    line: CartLine {
                        id: id.clone(),
                        product: Arc::clone(product),
                        quantity,
                        selected_size: size.map(str::to_owned),
                        selected_color: color.map(str::to_owned),
                    },
                });
            }
        }

        tracing::debug!(line = %id, quantity, "added to cart");
        Ok(id)
    }

    /// Sets a line's quantity.
    ///
    /// A quantity <= 0 removes the line entirely — the cart panel's
    /// decrement button relies on decrement-from-one deleting the row, so
    /// this is an implicit removal, not an error. Unknown ids are a no-op.
    pub fn update_quantity(&self, line_id: &str, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_item(line_id);
            return;
        }

        if let Some(mut entry) = self.lines.get_mut(line_id) {
            entry.line.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
            tracing::debug!(line = %line_id, quantity = new_quantity, "updated quantity");
        }
    }

    /// Deletes a line. No-op when the id is not present (double-click
    /// removes are expected and must not crash the session).
    pub fn remove_item(&self, line_id: &str) {
        if self.lines.remove(line_id).is_some() {
            tracing::debug!(line = %line_id, "removed from cart");
        }
    }

    /// Removes all lines. Used after a successful checkout.
    pub fn clear(&self) {
        self.lines.clear();
        tracing::debug!("cart cleared");
    }

    /// Current lines in first-added order, for rendering the cart panel.
    pub fn lines(&self) -> Vec<CartLine> {
        let mut entries: Vec<(u64, CartLine)> = self
            .lines
            .iter()
            .map(|entry| (entry.value().seq, entry.value().line.clone()))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, line)| line).collect()
    }

    /// Total number of units across all lines (the header badge count).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|entry| entry.value().line.quantity).sum()
    }

    /// Sum of line totals, unrounded. Display code rounds via
    /// [`super::helpers::format_price`].
    pub fn subtotal(&self) -> f64 {
        self.lines
            .iter()
            .map(|entry| entry.value().line.line_total())
            .sum()
    }

    /// True when the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
