//! # System Lifecycle
//!
//! Builds the running service: the product store, its seed data, the client on top of it and the
//! HTTP transport. [`CatalogSystem`] owns the store for the lifetime of the process; the HTTP
//! handlers only ever see the [`ProductClient`](crate::clients::ProductClient).
//!
//! ## Shutdown
//!
//! [`CatalogSystem::run`] serves until its shutdown future resolves (Ctrl+C in the binary, see
//! [`shutdown_signal`]), lets in-flight requests finish, then logs the final store size. Nothing
//! is persisted.

pub mod catalog_system;

pub use catalog_system::*;
