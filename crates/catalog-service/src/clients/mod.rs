//! Type-safe wrappers over a [`Repository`](resource_store::Repository).

pub mod product_client;

pub use product_client::ProductClient;
