//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartLine)
//! - Business logic helpers (line identity, formatting)
//! - The cart state manager (CartStore)

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::CartLine;
pub use state::{CartStore, SharedCart};
