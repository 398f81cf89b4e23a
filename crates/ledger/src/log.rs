//! The append-only movement log.

use stockroom_core::MovementId;
use stockroom_store::{Collection, CollectionStore, read_records, write_records};

use crate::error::LedgerResult;
use crate::movement::{Movement, MovementType, UncommittedMovement};

/// Durable, ordered, append-only record of all stock events.
///
/// The log is the sole source of truth for history and availability; the
/// balance cache is a disposable projection of it. Ids are assigned here and
/// only here: an [`UncommittedMovement`] carries no id, so no caller can
/// choose one.
#[derive(Debug)]
pub struct MovementLog<S> {
    store: S,
}

impl<S: CollectionStore> MovementLog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate, assign the next sequential id, and persist.
    ///
    /// The id is the highest existing numeric suffix + 1 (`M001` for an
    /// empty log), so ids stay dense and monotonic regardless of how
    /// receipt/pick/transfer appends interleave.
    pub fn append(&self, unposted: UncommittedMovement) -> LedgerResult<Movement> {
        unposted.validate()?;

        let mut movements: Vec<Movement> = read_records(&self.store, Collection::Movements)?;
        let next = movements
            .iter()
            .map(|m| m.id.sequence())
            .max()
            .unwrap_or(0)
            + 1;

        let movement = unposted.into_movement(MovementId::from_sequence(next));
        movements.push(movement.clone());
        write_records(&self.store, Collection::Movements, &movements)?;

        tracing::debug!(id = %movement.id, kind = ?movement.kind, qty = movement.qty, "movement appended");
        Ok(movement)
    }

    /// All movements in storage order. The log imposes no order beyond
    /// insertion; callers sort by timestamp as needed.
    pub fn list(&self) -> LedgerResult<Vec<Movement>> {
        Ok(read_records(&self.store, Collection::Movements)?)
    }

    /// Movements of one kind, storage order.
    pub fn list_by_type(&self, kind: MovementType) -> LedgerResult<Vec<Movement>> {
        let movements = self.list()?;
        Ok(movements.into_iter().filter(|m| m.kind == kind).collect())
    }
}
