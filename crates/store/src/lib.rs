//! Persistence seam for the stockroom collections.
//!
//! Every collection persists as one JSON array document under a namespaced
//! key. The [`CollectionStore`] trait is the only surface the rest of the
//! workspace talks to, so backends (in-memory, JSON files on disk) can be
//! swapped without touching ledger logic.

pub mod codec;
pub mod collection;
pub mod error;
pub mod in_memory;
pub mod json_file;
pub mod kv;

pub use codec::{read_records, write_records};
pub use collection::Collection;
pub use error::StoreError;
pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
pub use kv::CollectionStore;
