//! # Generic Record Store
//!
//! This module defines the `ResourceStore`, the component that owns every record of one
//! entity type together with the identifier counter, and serializes all mutations of them.

use crate::entity::StoreEntity;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

/// Everything the lock protects. Records and the id counter live behind the same guard
/// so that assigning an id and inserting the record happen as one step.
struct StoreState<T: StoreEntity> {
    records: HashMap<T::Id, T>,
    next_id: u64,
}

/// The generic store that manages a collection of records.
///
/// # Concurrency Model
///
/// A single `RwLock` covers the whole state:
///
/// * **Reads** (`list`, `get`, `search`) take the shared side and run in parallel with
///   each other.
/// * **Writes** (`create`, `update`, `delete`) take the exclusive side. A reader can never
///   observe a record with its id assigned but its timestamps missing, or a patched field
///   without the matching `updated_at`.
///
/// Guards are dropped on every return path, including "not found". There is only one lock,
/// so there is no lock ordering to get wrong.
///
/// Callers always receive clones; nothing outside the store holds a reference into it.
///
/// # Usage
///
/// ```rust
/// use resource_store::{ResourceStore, StoreEntity};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u64, text: String }
///
/// impl StoreEntity for Note {
///     type Id = u64;
///     type Create = String;
///     type Update = String;
///     type Query = String;
///
///     fn from_create_params(id: u64, text: String) -> Self { Self { id, text } }
///     fn on_update(&mut self, text: String) { self.text = text; }
///     fn matches(&self, query: &String) -> bool { self.text.contains(query.as_str()) }
/// }
///
/// let store = ResourceStore::<Note>::new();
/// let note = store.create("hello".to_string());
/// assert_eq!(note.id, 1);
/// assert_eq!(store.get(&1).unwrap().text, "hello");
/// assert!(store.delete(&1));
/// assert!(store.get(&1).is_none());
/// ```
pub struct ResourceStore<T: StoreEntity> {
    state: RwLock<StoreState<T>>,
}

impl<T: StoreEntity> ResourceStore<T> {
    /// Creates an empty store whose first assigned id will be `1`.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                records: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    // Every mutation is a sequence of infallible steps, so a guard dropped by a panicking
    // thread still leaves consistent state behind.
    fn read(&self) -> RwLockReadGuard<'_, StoreState<T>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState<T>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every record, in no particular order.
    pub fn list(&self) -> Vec<T> {
        let state = self.read();
        debug!(entity_type = entity_type::<T>(), size = state.records.len(), "List");
        state.records.values().cloned().collect()
    }

    /// Fetch a single record by id.
    pub fn get(&self, id: &T::Id) -> Option<T> {
        let item = self.read().records.get(id).cloned();
        debug!(entity_type = entity_type::<T>(), %id, found = item.is_some(), "Get");
        item
    }

    /// Insert a new record built from `params` and return the stored copy.
    ///
    /// The counter advances even if the record is later deleted; ids are never reused.
    pub fn create(&self, params: T::Create) -> T {
        let entity_type = entity_type::<T>();
        debug!(entity_type, ?params, "Create");

        let mut state = self.write();
        let id = T::Id::from(state.next_id);
        state.next_id += 1;

        let item = T::from_create_params(id.clone(), params);
        state.records.insert(id.clone(), item.clone());
        info!(entity_type, %id, size = state.records.len(), "Created");
        item
    }

    /// Apply a sparse update to an existing record.
    ///
    /// Returns the updated record, or `None` when no record has this id.
    pub fn update(&self, id: &T::Id, update: T::Update) -> Option<T> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, ?update, "Update");

        let mut state = self.write();
        match state.records.get_mut(id) {
            Some(item) => {
                item.on_update(update);
                info!(entity_type, %id, "Updated");
                Some(item.clone())
            }
            None => {
                warn!(entity_type, %id, "Not found");
                None
            }
        }
    }

    /// Remove a record. Returns whether a record existed.
    pub fn delete(&self, id: &T::Id) -> bool {
        let entity_type = entity_type::<T>();
        let mut state = self.write();
        if state.records.remove(id).is_some() {
            info!(entity_type, %id, size = state.records.len(), "Deleted");
            true
        } else {
            warn!(entity_type, %id, "Not found");
            false
        }
    }

    /// Every record for which [`StoreEntity::matches`] holds.
    pub fn search(&self, query: &T::Query) -> Vec<T> {
        let state = self.read();
        let found: Vec<T> = state
            .records
            .values()
            .filter(|item| item.matches(query))
            .cloned()
            .collect();
        debug!(entity_type = entity_type::<T>(), ?query, found = found.len(), "Search");
        found
    }
}

impl<T: StoreEntity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Short type name for log fields (e.g. "Product" instead of "catalog_service::model::product::Product").
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u64,
        label: String,
        value: i64,
    }

    impl StoreEntity for Counter {
        type Id = u64;
        type Create = String;
        type Update = i64;
        type Query = i64;

        fn from_create_params(id: u64, label: String) -> Self {
            Self { id, label, value: 0 }
        }

        fn on_update(&mut self, delta: i64) {
            self.value += delta;
        }

        fn matches(&self, min: &i64) -> bool {
            self.value >= *min
        }
    }

    #[test]
    fn test_ids_start_at_one_and_are_never_reused() {
        let store = ResourceStore::<Counter>::new();
        assert!(store.is_empty());

        let a = store.create("a".into());
        let b = store.create("b".into());
        assert_eq!((a.id, b.id), (1, 2));

        assert!(store.delete(&b.id));
        let c = store.create("c".into());
        assert_eq!(c.id, 3);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_and_delete_report_missing_records() {
        let store = ResourceStore::<Counter>::new();
        assert_eq!(store.update(&42, 1), None);
        assert!(!store.delete(&42));

        let created = store.create("hits".into());
        let updated = store.update(&created.id, 5).unwrap();
        assert_eq!(updated.value, 5);
        assert_eq!(store.get(&created.id), Some(updated));
    }

    #[test]
    fn test_search_filters_with_entity_predicate() {
        let store = ResourceStore::<Counter>::new();
        let low = store.create("low".into());
        let high = store.create("high".into());
        store.update(&low.id, 1);
        store.update(&high.id, 10);

        let found = store.search(&5);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].label, "high");
        assert_eq!(store.search(&0).len(), 2);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let store = std::sync::Arc::new(ResourceStore::<Counter>::new());
        store.create("before".into());

        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.write();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(store.len(), 1);
        assert_eq!(store.create("after".into()).id, 2);
    }

    #[test]
    fn test_entity_type_strips_module_path() {
        assert_eq!(entity_type::<Counter>(), "Counter");
    }
}
