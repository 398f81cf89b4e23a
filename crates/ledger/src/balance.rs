//! Balance rows and the pure delta/rebuild rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{LocationId, ProductId};

use crate::movement::Movement;

/// Cached, denormalized balance for one `(product, location)` pair.
///
/// `qty` is clamped to `>= 0` on every write. The row set is a projection of
/// the movement log: disposable, and rebuildable from it at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRow {
    pub product_id: ProductId,
    pub location_id: LocationId,
    pub qty: i64,
    pub updated_at: DateTime<Utc>,
}

/// Apply one signed delta to the row set, clamping at zero.
///
/// Creates the row with `qty = max(0, delta)` when the key is new; otherwise
/// `qty = max(0, qty + delta)` and `updated_at` is refreshed. Rows are never
/// deleted. Returns the index of the touched row.
pub fn apply_delta(
    rows: &mut Vec<BalanceRow>,
    product_id: &ProductId,
    location_id: &LocationId,
    delta: i64,
    at: DateTime<Utc>,
) -> usize {
    match rows
        .iter()
        .position(|r| r.product_id == *product_id && r.location_id == *location_id)
    {
        Some(idx) => {
            let row = &mut rows[idx];
            row.qty = (row.qty + delta).max(0);
            row.updated_at = at;
            idx
        }
        None => {
            rows.push(BalanceRow {
                product_id: product_id.clone(),
                location_id: location_id.clone(),
                qty: delta.max(0),
                updated_at: at,
            });
            rows.len() - 1
        }
    }
}

/// Rebuild the full balance table by replaying a movement log through the
/// same delta rules the write path uses.
pub fn rebuild(movements: &[Movement]) -> Vec<BalanceRow> {
    let mut rows = Vec::new();
    for movement in movements {
        for (location_id, delta) in movement.balance_deltas() {
            apply_delta(
                &mut rows,
                &movement.product_id,
                &location_id,
                delta,
                movement.timestamp,
            );
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use proptest::prelude::*;

    use super::*;
    use crate::movement::{ReceiptDraft, TransferDraft};
    use stockroom_core::MovementId;

    fn t(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, secs).unwrap()
    }

    fn p(code: &str) -> ProductId {
        ProductId::new(code)
    }

    fn l(code: &str) -> LocationId {
        LocationId::new(code)
    }

    #[test]
    fn first_delta_creates_the_row_clamped() {
        let mut rows = Vec::new();
        apply_delta(&mut rows, &p("P1"), &l("L1"), -5, t(0));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].qty, 0);

        apply_delta(&mut rows, &p("P1"), &l("L2"), 5, t(1));
        assert_eq!(rows[1].qty, 5);
    }

    #[test]
    fn existing_row_accumulates_and_clamps() {
        let mut rows = Vec::new();
        apply_delta(&mut rows, &p("P1"), &l("L1"), 10, t(0));
        apply_delta(&mut rows, &p("P1"), &l("L1"), -4, t(1));
        assert_eq!(rows[0].qty, 6);
        assert_eq!(rows[0].updated_at, t(1));

        // An oversized negative delta clamps instead of going negative.
        apply_delta(&mut rows, &p("P1"), &l("L1"), -100, t(2));
        assert_eq!(rows[0].qty, 0);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn keys_are_per_product_and_location() {
        let mut rows = Vec::new();
        apply_delta(&mut rows, &p("P1"), &l("L1"), 3, t(0));
        apply_delta(&mut rows, &p("P2"), &l("L1"), 4, t(0));
        apply_delta(&mut rows, &p("P1"), &l("L2"), 5, t(0));
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn rebuild_replays_transfers_as_two_row_updates() {
        let receipt = ReceiptDraft {
            product_id: p("P1"),
            to_location_id: l("L1"),
            qty: 10,
            reference: None,
        }
        .into_uncommitted(t(0))
        .into_movement(MovementId::from_sequence(1));

        let transfer = TransferDraft {
            product_id: p("P1"),
            from_location_id: l("L1"),
            to_location_id: l("L2"),
            qty: 4,
            reference: None,
        }
        .into_uncommitted(t(1))
        .into_movement(MovementId::from_sequence(2));

        let rows = rebuild(&[receipt, transfer]);
        let qty_at = |loc: &str| {
            rows.iter()
                .find(|r| r.location_id == l(loc))
                .map(|r| r.qty)
                .unwrap()
        };
        assert_eq!(qty_at("L1"), 6);
        assert_eq!(qty_at("L2"), 4);
    }

    proptest! {
        // After any delta sequence over a small key space, no row is negative.
        #[test]
        fn rows_never_go_negative(deltas in prop::collection::vec((0u8..3, 0u8..3, -50i64..50), 0..64)) {
            let mut rows = Vec::new();
            for (pi, li, delta) in deltas {
                let product = p(&format!("P{pi}"));
                let location = l(&format!("L{li}"));
                apply_delta(&mut rows, &product, &location, delta, t(0));
            }
            prop_assert!(rows.iter().all(|r| r.qty >= 0));
        }
    }
}
