//! The stockroom ledger engine.
//!
//! An append-only movement log (`RECEIPT` / `PICK` / `TRANSFER`) is the sole
//! source of truth for stock history; a denormalized balance cache is kept in
//! sync with every accepted movement and can be rebuilt from the log at any
//! time. Availability for picking is always computed by replaying the log,
//! never by trusting the cache; read paths are named for the source they
//! use.

pub mod balance;
pub mod cache;
pub mod error;
pub mod log;
pub mod movement;
pub mod replay;
pub mod service;

pub use balance::BalanceRow;
pub use cache::BalanceCache;
pub use error::{LedgerError, LedgerResult};
pub use log::MovementLog;
pub use movement::{
    Movement, MovementType, PickDraft, ReceiptDraft, TransferDraft, UncommittedMovement,
};
pub use replay::available_by_replay;
pub use service::{Ledger, Posting};
