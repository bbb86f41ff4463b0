//! Orders Domain Module
//!
//! Order records produced by the checkout flow and the totals math behind
//! the checkout summary.

pub mod models;

// Re-export commonly used types for convenience
pub use models::{
    CheckoutTotals, NewOrder, Order, OrderItem, OrderStatus, PaymentMethod, PaymentType,
    ShippingAddress, ShippingMethod,
};
