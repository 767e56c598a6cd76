//! # StoreEntity Trait
//!
//! The `StoreEntity` trait defines the contract that every record type must implement to be
//! held by the generic [`ResourceStore`](crate::ResourceStore). It specifies associated types
//! for IDs, create payloads, sparse update payloads and search queries, plus the three hooks
//! the store calls while holding its lock (`from_create_params`, `on_update`, `matches`).
//!
//! # Architecture Note
//! The store owns identifier assignment, locking and logging. The entity owns its own
//! business rules: how a payload becomes a record, which fields of a patch count as
//! "supplied", and what a query matches. Keeping the two apart means the store loop is
//! written *once* and a record type never touches a lock.
//!
//! # Hooks Are Synchronous
//! Every hook runs inside the store's write (or read) guard. They must be quick, must not
//! block and cannot `.await`; a hook that needs I/O belongs in the layer above the store.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by a `ResourceStore`.
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from `u64` so the store can assign ids from its counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u64> + 'static;

    /// The data required to create a new record (everything except the id).
    type Create: Send + Sync + Debug;

    /// The sparse patch applied by an update.
    type Update: Send + Sync + Debug;

    /// The predicate payload accepted by `search`.
    type Query: Send + Sync + Debug;

    /// Construct the full record from the assigned ID and the payload.
    ///
    /// Called with the write guard held, so anything set here (timestamps included)
    /// becomes visible to readers together with the id.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Self;

    /// Apply an update to this record in place.
    fn on_update(&mut self, update: Self::Update);

    /// Returns `true` when this record should be part of a `search` result.
    fn matches(&self, query: &Self::Query) -> bool;
}
