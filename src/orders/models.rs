//! Order Domain Models
//!
//! This module contains the order record the checkout flow produces, the
//! create-order input, and the checkout totals math (tax and shipping).

use crate::cart::CartLine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sales tax applied at checkout.
pub const TAX_RATE: f64 = 0.08;

/// Flat express shipping surcharge; standard shipping is free.
pub const EXPRESS_SHIPPING_COST: f64 = 15.0;

// =============================================================================
// Order Domain Models
// =============================================================================

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// How the order is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Card,
    Paypal,
    ApplePay,
}

/// Payment method captured at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub payment_type: PaymentType,

    /// Last four card digits, for card payments.
    #[serde(default)]
    pub last4: Option<String>,
}

/// Shipping destination captured at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// One purchased line inside an order. Snapshots the unit price at purchase
/// time, so later catalog changes cannot rewrite order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
    pub price: f64,
}

impl OrderItem {
    /// Snapshots a cart line into an order item.
    pub fn from_line(line: &CartLine) -> Self {
        Self {
            product_id: line.product.id.clone(),
            quantity: line.quantity,
            price: line.product.price,
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Generated identifier, `"ORD-{millis}"`.
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
}

/// Input to order creation: everything except the generated id and
/// timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
}

// =============================================================================
// Checkout Totals
// =============================================================================

/// Shipping option picked in the checkout form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
}

impl ShippingMethod {
    pub fn cost(&self) -> f64 {
        match self {
            Self::Standard => 0.0,
            Self::Express => EXPRESS_SHIPPING_COST,
        }
    }
}

/// The checkout summary box: subtotal, tax, shipping and grand total.
///
/// Values stay unrounded; display code formats them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckoutTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub shipping: f64,
    pub total: f64,
}

impl CheckoutTotals {
    /// Derives the summary from a cart subtotal and shipping choice.
    pub fn compute(subtotal: f64, shipping: ShippingMethod) -> Self {
        let tax = subtotal * TAX_RATE;
        let shipping = shipping.cost();
        Self {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
        }
    }
}
