//! # Repository Trait
//!
//! The async access contract for a collection of records. [`ResourceStore`] is the in-memory
//! implementation; [`MockRepository`](crate::mock::MockRepository) is the test double. A durable
//! backend would implement the same trait and the layers above would not change.
//!
//! Not-found is never an error here: lookups return `Option`, deletes return `bool`.

use crate::entity::StoreEntity;
use crate::store::ResourceStore;
use async_trait::async_trait;

/// Operations every record backend provides.
#[async_trait]
pub trait Repository<T: StoreEntity>: Send + Sync {
    /// All records, in no particular order.
    async fn list(&self) -> Vec<T>;

    /// The record with this id, if any.
    async fn get(&self, id: &T::Id) -> Option<T>;

    /// Store a new record and return it with its assigned id.
    async fn create(&self, params: T::Create) -> T;

    /// Apply a sparse update. `None` when the id is unknown.
    async fn update(&self, id: &T::Id, update: T::Update) -> Option<T>;

    /// Remove a record. `false` when the id is unknown.
    async fn delete(&self, id: &T::Id) -> bool;

    /// Records matching the query.
    async fn search(&self, query: &T::Query) -> Vec<T>;
}

#[async_trait]
impl<T: StoreEntity> Repository<T> for ResourceStore<T> {
    async fn list(&self) -> Vec<T> {
        ResourceStore::list(self)
    }

    async fn get(&self, id: &T::Id) -> Option<T> {
        ResourceStore::get(self, id)
    }

    async fn create(&self, params: T::Create) -> T {
        ResourceStore::create(self, params)
    }

    async fn update(&self, id: &T::Id, update: T::Update) -> Option<T> {
        ResourceStore::update(self, id, update)
    }

    async fn delete(&self, id: &T::Id) -> bool {
        ResourceStore::delete(self, id)
    }

    async fn search(&self, query: &T::Query) -> Vec<T> {
        ResourceStore::search(self, query)
    }
}
