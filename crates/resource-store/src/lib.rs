//! # Resource Store
//!
//! Building blocks for keeping a collection of typed records in memory under concurrent access.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`StoreEntity`]) - your record type and its business rules
//! 2. **Storage Layer** ([`ResourceStore`]) - id assignment, locking and logging
//! 3. **Interface Layer** ([`Repository`]) - the async contract the rest of an application codes against
//!
//! Business rules are written once in the entity, and the store takes care of atomicity:
//! id assignment and insertion happen under one write guard, and readers only ever see
//! complete records.
//!
//! ## Concurrency Model
//!
//! - One `RwLock` per store, covering the records *and* the id counter
//! - Reads share the lock, writes are exclusive
//! - No background tasks, no channels, no suspension points inside an operation
//!
//! ## Testing
//!
//! [`mock::MockRepository`] implements [`Repository`] from a queue of expectations, so code
//! layered on top of a repository can be tested without a real store.

pub mod entity;
pub mod mock;
pub mod repository;
pub mod store;
pub mod tracing;

pub use entity::StoreEntity;
pub use repository::Repository;
pub use store::ResourceStore;
