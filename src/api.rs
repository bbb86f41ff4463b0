//! Stub API Layer
//!
//! Mock API functions standing in for a real backend. Each sleeps its
//! artificial delay and then returns an empty or mock result; the product
//! data a real deployment would fetch here ships compiled-in instead (see
//! [`crate::catalog::data`]). Swap these bodies for real requests when a
//! backend exists.

use crate::cart::CartLine;
use crate::catalog::Product;
use crate::orders::{NewOrder, Order};
use chrono::Utc;
use std::time::Duration;
use tokio::time::sleep;

/// Fetches the full product list. Stub: the catalog is compiled-in.
pub async fn fetch_products() -> Vec<Product> {
    sleep(Duration::from_millis(1000)).await;
    tracing::debug!("fetch_products stub");
    Vec::new()
}

/// Fetches a single product by id.
pub async fn fetch_product(id: &str) -> Option<Product> {
    sleep(Duration::from_millis(800)).await;
    tracing::debug!(%id, "fetch_product stub");
    None
}

/// Server-side product search.
pub async fn search_products(query: &str) -> Vec<Product> {
    sleep(Duration::from_millis(600)).await;
    tracing::debug!(%query, "search_products stub");
    Vec::new()
}

/// Fetches products in one category.
pub async fn fetch_products_by_category(category: &str) -> Vec<Product> {
    sleep(Duration::from_millis(800)).await;
    tracing::debug!(%category, "fetch_products_by_category stub");
    Vec::new()
}

/// Places an order. Mock response: echoes the input with a generated id and
/// fresh timestamps, status untouched.
pub async fn create_order(new_order: NewOrder) -> Order {
    sleep(Duration::from_millis(1200)).await;

    let now = Utc::now();
    let order = Order {
        id: format!("ORD-{}", now.timestamp_millis()),
        user_id: new_order.user_id,
        items: new_order.items,
        total: new_order.total,
        status: new_order.status,
        created_at: now,
        updated_at: now,
        shipping_address: new_order.shipping_address,
        payment_method: new_order.payment_method,
    };
    tracing::info!(order = %order.id, total = order.total, "order placed");
    order
}

/// Fetches a user's order history.
pub async fn fetch_orders(user_id: &str) -> Vec<Order> {
    sleep(Duration::from_millis(800)).await;
    tracing::debug!(%user_id, "fetch_orders stub");
    Vec::new()
}

/// Fetches a single order by id.
pub async fn fetch_order(order_id: &str) -> Option<Order> {
    sleep(Duration::from_millis(600)).await;
    tracing::debug!(%order_id, "fetch_order stub");
    None
}

/// Pushes the cart to the backend for a signed-in user. Stub: no-op.
pub async fn sync_cart(user_id: &str, lines: &[CartLine]) {
    sleep(Duration::from_millis(600)).await;
    tracing::debug!(%user_id, lines = lines.len(), "sync_cart stub");
}

/// Pulls a signed-in user's saved cart.
pub async fn fetch_cart(user_id: &str) -> Vec<CartLine> {
    sleep(Duration::from_millis(400)).await;
    tracing::debug!(%user_id, "fetch_cart stub");
    Vec::new()
}
