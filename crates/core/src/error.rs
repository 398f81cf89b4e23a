//! Domain error model.

use thiserror::Error;

use crate::id::LocationId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// invariants). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank code, non-positive quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A pick/transfer asked for more than the replayed availability.
    #[error("insufficient stock: requested {requested}, available {available} at {location}")]
    InsufficientStock {
        requested: i64,
        available: i64,
        location: LocationId,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn insufficient_stock(requested: i64, available: i64, location: LocationId) -> Self {
        Self::InsufficientStock {
            requested,
            available,
            location,
        }
    }
}
