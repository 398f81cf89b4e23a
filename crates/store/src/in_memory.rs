//! In-memory collection store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::collection::Collection;
use crate::error::StoreError;
use crate::kv::CollectionStore;

/// In-memory backend keyed by collection key.
///
/// Intended for tests and embedding. Not durable.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<HashMap<&'static str, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollectionStore for InMemoryStore {
    fn get(&self, collection: Collection) -> Result<Option<String>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.get(collection.key()).cloned())
    }

    fn put(&self, collection: Collection, raw: String) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        map.insert(collection.key(), raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn get_returns_none_until_first_put() {
        let store = InMemoryStore::new();
        assert!(store.get(Collection::Products).unwrap().is_none());

        store.put(Collection::Products, "[]".to_string()).unwrap();
        assert_eq!(store.get(Collection::Products).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn put_replaces_the_full_document() {
        let store = InMemoryStore::new();
        store.put(Collection::Movements, "[1]".to_string()).unwrap();
        store.put(Collection::Movements, "[1,2]".to_string()).unwrap();
        assert_eq!(
            store.get(Collection::Movements).unwrap().as_deref(),
            Some("[1,2]")
        );
    }

    #[test]
    fn collections_are_independent() {
        let store = InMemoryStore::new();
        store.put(Collection::Products, "[\"p\"]".to_string()).unwrap();
        assert!(store.get(Collection::Locations).unwrap().is_none());
    }

    #[test]
    fn shared_via_arc_through_the_blanket_impl() {
        let store = Arc::new(InMemoryStore::new());
        let clone = store.clone();
        clone.put(Collection::Locations, "[]".to_string()).unwrap();
        assert!(store.get(Collection::Locations).unwrap().is_some());
    }
}
