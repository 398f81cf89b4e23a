//! Ledger error model: domain rejections and storage failures, kept apart.

use thiserror::Error;

use stockroom_core::DomainError;
use stockroom_store::StoreError;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Error from a ledger operation.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Deterministic rejection (validation, insufficient stock). The caller
    /// gets the same answer on resubmission unless the input changes.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Storage infrastructure failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
