//! # Product Store
//!
//! The authoritative in-memory set of products.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](resource_store::StoreEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for the client layer
//! - [`new()`] / [`seed()`] - constructor and the one-time sample data bootstrap
//!
//! ## Usage
//!
//! ```rust
//! use catalog_service::model::ProductQuery;
//! use catalog_service::product_store;
//!
//! let store = product_store::new();
//! product_store::seed(&store);
//!
//! assert_eq!(store.list().len(), 3);
//! assert_eq!(store.search(&ProductQuery::category("Accessories")).len(), 2);
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Product, ProductDraft};
use resource_store::ResourceStore;
use tracing::info;

/// The store holding every [`Product`].
pub type ProductStore = ResourceStore<Product>;

/// Creates an empty product store; the first product gets id `1`.
pub fn new() -> ProductStore {
    ResourceStore::new()
}

/// The catalog's bootstrap data.
pub fn sample_products() -> Vec<ProductDraft> {
    vec![
        ProductDraft::new("Laptop", 1299.99, 15)
            .with_description("High-performance laptop for developers")
            .with_category("Electronics"),
        ProductDraft::new("Wireless Mouse", 29.99, 100)
            .with_description("Ergonomic wireless mouse")
            .with_category("Accessories"),
        ProductDraft::new("Mechanical Keyboard", 149.99, 50)
            .with_description("RGB mechanical gaming keyboard")
            .with_category("Accessories"),
    ]
}

/// Inserts [`sample_products`] through the regular create path and returns them.
///
/// Meant to run once, right after construction: on an empty store the samples get ids 1 to 3.
pub fn seed(store: &ProductStore) -> Vec<Product> {
    let seeded: Vec<Product> = sample_products()
        .into_iter()
        .map(|draft| store.create(draft))
        .collect();
    info!(count = seeded.len(), "Seeded sample products");
    seeded
}
