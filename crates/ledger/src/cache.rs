//! The persisted balance cache (the `stockLedger` collection).

use chrono::{DateTime, Utc};

use stockroom_core::{LocationId, ProductId};
use stockroom_store::{Collection, CollectionStore, read_records, write_records};

use crate::balance::{self, BalanceRow};
use crate::error::LedgerResult;
use crate::movement::Movement;

/// O(1)-lookup current balance per `(product, location)`, kept consistent
/// with every accepted movement.
///
/// This cache is a read optimization only. Anywhere correctness matters
/// (pick validation, audits), callers go through the replayed availability
/// instead. Clamping at zero keeps the cache presentation-safe even if an
/// out-of-band write slipped in, at the cost of strict accuracy.
#[derive(Debug)]
pub struct BalanceCache<S> {
    store: S,
}

impl<S: CollectionStore> BalanceCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Apply one signed delta and persist. Returns the touched row.
    pub fn apply_delta(
        &self,
        product_id: &ProductId,
        location_id: &LocationId,
        delta: i64,
        at: DateTime<Utc>,
    ) -> LedgerResult<BalanceRow> {
        let mut rows: Vec<BalanceRow> = read_records(&self.store, Collection::StockLedger)?;
        let idx = balance::apply_delta(&mut rows, product_id, location_id, delta, at);
        write_records(&self.store, Collection::StockLedger, &rows)?;
        Ok(rows[idx].clone())
    }

    /// Cached balance for one key, `None` if no movement ever touched it.
    pub fn get(
        &self,
        product_id: &ProductId,
        location_id: &LocationId,
    ) -> LedgerResult<Option<BalanceRow>> {
        let rows: Vec<BalanceRow> = read_records(&self.store, Collection::StockLedger)?;
        Ok(rows
            .into_iter()
            .find(|r| r.product_id == *product_id && r.location_id == *location_id))
    }

    /// All cached rows, storage order.
    pub fn list(&self) -> LedgerResult<Vec<BalanceRow>> {
        Ok(read_records(&self.store, Collection::StockLedger)?)
    }

    /// Discard the table and rebuild it from the movement log.
    pub fn rebuild_from(&self, movements: &[Movement]) -> LedgerResult<Vec<BalanceRow>> {
        let rows = balance::rebuild(movements);
        write_records(&self.store, Collection::StockLedger, &rows)?;
        tracing::info!(rows = rows.len(), "balance cache rebuilt from movement log");
        Ok(rows)
    }
}
