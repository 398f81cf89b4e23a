//! The collection store trait.

use std::sync::Arc;

use crate::collection::Collection;
use crate::error::StoreError;

/// Keyed document store: one raw JSON document per collection.
///
/// This is the injected persistence boundary of the whole workspace. The
/// contract is intentionally small (whole-document read and replace), so
/// every write is a read-modify-write of one collection and implementations
/// stay trivial.
///
/// ## Implementation requirements
///
/// - `get` returns `None` for a collection that was never written (callers
///   treat that as an empty collection).
/// - `put` replaces the full document; there is no partial update.
/// - Implementations must be `Send + Sync` so one store can be shared across
///   a process, but no transaction boundary spans two `put` calls.
pub trait CollectionStore: Send + Sync {
    /// Raw document for a collection, `None` if never written.
    fn get(&self, collection: Collection) -> Result<Option<String>, StoreError>;

    /// Replace the full document for a collection.
    fn put(&self, collection: Collection, raw: String) -> Result<(), StoreError>;
}

impl<S> CollectionStore for Arc<S>
where
    S: CollectionStore + ?Sized,
{
    fn get(&self, collection: Collection) -> Result<Option<String>, StoreError> {
        (**self).get(collection)
    }

    fn put(&self, collection: Collection, raw: String) -> Result<(), StoreError> {
        (**self).put(collection, raw)
    }
}
