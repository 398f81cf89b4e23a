//! Storage error model.
//!
//! These are **infrastructure errors** (IO, locking, encoding) as opposed to
//! domain errors (validation, invariants). Malformed persisted documents are
//! deliberately *not* represented here: they decode to an empty collection
//! (see [`crate::codec`]).

use thiserror::Error;

/// Storage operation error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io failure for '{key}': {source}")]
    Io {
        key: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("storage lock poisoned")]
    LockPoisoned,

    #[error("failed to encode '{key}': {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn io(key: &'static str, source: std::io::Error) -> Self {
        Self::Io { key, source }
    }

    pub fn encode(key: &'static str, source: serde_json::Error) -> Self {
        Self::Encode { key, source }
    }
}
