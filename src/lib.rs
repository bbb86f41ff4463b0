//! Storefront Core Library
//!
//! This library provides the state and query core of an e-commerce
//! storefront: the shopping-cart state manager and the catalog
//! filtering/sorting engine, plus the order data model and the stub
//! API layer the presentation code calls.
//!
//! The UI layers (listing page, cart panel, checkout forms) are external
//! collaborators: they construct a [`cart::CartStore`], feed
//! [`catalog::query`] with a [`catalog::FilterState`], and render whatever
//! comes back. Nothing in here touches the network or the disk.

// Domain modules
pub mod api;
pub mod cart;
pub mod catalog;
pub mod orders;

// Infrastructure
pub mod error;

pub use error::StoreError;
