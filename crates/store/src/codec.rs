//! Typed record access over raw collection documents.
//!
//! Decoding implements the corruption recovery policy: a missing or
//! malformed document reads as an empty collection. Malformed documents are
//! logged (the data loss should at least be visible) but never surfaced as
//! errors to the caller.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::collection::Collection;
use crate::error::StoreError;
use crate::kv::CollectionStore;

/// Decode a collection document into typed records.
///
/// Missing documents and documents that fail to parse both decode to an
/// empty list. Storage IO failures still propagate.
pub fn read_records<T, S>(store: &S, collection: Collection) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned,
    S: CollectionStore + ?Sized,
{
    let Some(raw) = store.get(collection)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(records) => Ok(records),
        Err(err) => {
            tracing::warn!(
                collection = collection.key(),
                %err,
                "malformed collection document, treating as empty"
            );
            Ok(Vec::new())
        }
    }
}

/// Encode typed records and replace the collection document.
pub fn write_records<T, S>(store: &S, collection: Collection, records: &[T]) -> Result<(), StoreError>
where
    T: Serialize,
    S: CollectionStore + ?Sized,
{
    let raw = serde_json::to_string(records).map_err(|e| StoreError::encode(collection.key(), e))?;
    store.put(collection, raw)
}
