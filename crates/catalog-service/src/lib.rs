//! # Catalog Service
//!
//! A product-catalog HTTP service over a concurrent in-memory store.
//!
//! ## Core Components
//!
//! - **[model]**: [`Product`](model::Product) and its create, patch and query payloads.
//! - **[product_store]**: the [`StoreEntity`](resource_store::StoreEntity) rules for products, plus
//!   the store constructor and seed data.
//! - **[clients]**: [`ProductClient`](clients::ProductClient), a typed wrapper over any
//!   [`Repository`](resource_store::Repository).
//! - **[web]**: axum routes, request validation and JSON errors.
//! - **[config]**: environment configuration.
//! - **[lifecycle]**: [`CatalogSystem`](lifecycle::CatalogSystem), which wires it all together.
//!
//! ## Testing
//!
//! See [`resource_store::mock`] for testing clients without a real store.

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod product_store;
pub mod web;
