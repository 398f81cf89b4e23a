//! The write-side ledger facade.

use chrono::Utc;

use stockroom_core::{DomainError, LocationId, ProductId};
use stockroom_store::CollectionStore;

use crate::balance::BalanceRow;
use crate::cache::BalanceCache;
use crate::error::LedgerResult;
use crate::log::MovementLog;
use crate::movement::{Movement, MovementType, PickDraft, ReceiptDraft, TransferDraft, UncommittedMovement};
use crate::replay::available_by_replay;

/// Combined result of one posting: the stored movement plus every balance
/// row it touched, in apply order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub movement: Movement,
    pub balances: Vec<BalanceRow>,
}

/// Movement log + balance cache behind one write surface.
///
/// Each `record_*` method is a single transaction function: it validates,
/// appends the movement, applies the balance deltas, and returns the
/// combined [`Posting`]. The two writes are sequential and synchronous;
/// there is no cross-write transaction boundary (a fatal crash between them
/// is out of scope), and readers observe each posting as one unit.
///
/// Read paths name their source of truth:
/// [`available_by_replay`](Ledger::available_by_replay) and the movement
/// listings replay/read the log; [`cached_balance`](Ledger::cached_balance)
/// and [`balances`](Ledger::balances) read the cache, which is advisory
/// only.
#[derive(Debug)]
pub struct Ledger<S> {
    log: MovementLog<S>,
    cache: BalanceCache<S>,
}

impl<S: CollectionStore + Clone> Ledger<S> {
    pub fn new(store: S) -> Self {
        Self {
            log: MovementLog::new(store.clone()),
            cache: BalanceCache::new(store),
        }
    }
}

impl<S: CollectionStore> Ledger<S> {
    /// Post a goods receipt: append a `RECEIPT` movement and add `qty` to
    /// the cache at `(product, to)`.
    pub fn record_receipt(&self, draft: ReceiptDraft) -> LedgerResult<Posting> {
        draft.validate()?;
        let posting = self.post(draft.into_uncommitted(Utc::now()))?;
        tracing::info!(
            id = %posting.movement.id,
            product = %posting.movement.product_id,
            qty = posting.movement.qty,
            "goods receipt posted"
        );
        Ok(posting)
    }

    /// Post a pick: checked against the replayed availability (never the
    /// cache), then append a `PICK` movement and subtract `qty` at
    /// `(product, from)`. Rejections leave both stores untouched.
    pub fn record_pick(&self, draft: PickDraft) -> LedgerResult<Posting> {
        draft.validate()?;
        self.ensure_available(&draft.product_id, &draft.from_location_id, draft.qty)?;

        let posting = self.post(draft.into_uncommitted(Utc::now()))?;
        tracing::info!(
            id = %posting.movement.id,
            product = %posting.movement.product_id,
            qty = posting.movement.qty,
            "pick posted"
        );
        Ok(posting)
    }

    /// Post a bin-to-bin transfer: availability is checked at the source
    /// location, then one `TRANSFER` movement is appended and both legs are
    /// applied to the cache (source first).
    pub fn record_transfer(&self, draft: TransferDraft) -> LedgerResult<Posting> {
        draft.validate()?;
        self.ensure_available(&draft.product_id, &draft.from_location_id, draft.qty)?;

        let posting = self.post(draft.into_uncommitted(Utc::now()))?;
        tracing::info!(
            id = %posting.movement.id,
            product = %posting.movement.product_id,
            qty = posting.movement.qty,
            "transfer posted"
        );
        Ok(posting)
    }

    /// Authoritative availability at `(product, location)` by full replay of
    /// the log. Use this wherever correctness matters.
    pub fn available_by_replay(
        &self,
        product_id: &ProductId,
        location_id: &LocationId,
    ) -> LedgerResult<i64> {
        let movements = self.log.list()?;
        Ok(available_by_replay(&movements, product_id, location_id))
    }

    /// Cached balance row for one key. Fast, advisory only.
    pub fn cached_balance(
        &self,
        product_id: &ProductId,
        location_id: &LocationId,
    ) -> LedgerResult<Option<BalanceRow>> {
        self.cache.get(product_id, location_id)
    }

    /// All cached balance rows.
    pub fn balances(&self) -> LedgerResult<Vec<BalanceRow>> {
        self.cache.list()
    }

    /// All movements, storage order.
    pub fn movements(&self) -> LedgerResult<Vec<Movement>> {
        self.log.list()
    }

    /// Movements of one kind, storage order.
    pub fn movements_by_type(&self, kind: MovementType) -> LedgerResult<Vec<Movement>> {
        self.log.list_by_type(kind)
    }

    /// Throw away the balance cache and rebuild it from the log.
    pub fn rebuild_balances(&self) -> LedgerResult<Vec<BalanceRow>> {
        let movements = self.log.list()?;
        self.cache.rebuild_from(&movements)
    }

    fn ensure_available(
        &self,
        product_id: &ProductId,
        from_location_id: &LocationId,
        qty: i64,
    ) -> LedgerResult<()> {
        let movements = self.log.list()?;
        let available = available_by_replay(&movements, product_id, from_location_id);
        if qty > available {
            return Err(
                DomainError::insufficient_stock(qty, available, from_location_id.clone()).into(),
            );
        }
        Ok(())
    }

    fn post(&self, unposted: UncommittedMovement) -> LedgerResult<Posting> {
        let movement = self.log.append(unposted)?;
        let mut balances = Vec::with_capacity(2);
        for (location_id, delta) in movement.balance_deltas() {
            balances.push(self.cache.apply_delta(
                &movement.product_id,
                &location_id,
                delta,
                movement.timestamp,
            )?);
        }
        Ok(Posting { movement, balances })
    }
}
