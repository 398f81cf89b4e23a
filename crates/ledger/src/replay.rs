//! Authoritative availability by full replay of the movement log.

use stockroom_core::{LocationId, ProductId};

use crate::movement::{Movement, MovementType};

/// Quantity available for picking at `(product, location)`, computed by
/// replaying every movement.
///
/// Receipts into the location add, picks out of it subtract, and each
/// transfer leg touching it applies its signed quantity. No clamping: this
/// path is exact, and may go negative only for histories recorded out of
/// causal order. O(n) in total movement count; no index is maintained.
pub fn available_by_replay(
    movements: &[Movement],
    product_id: &ProductId,
    location_id: &LocationId,
) -> i64 {
    let mut qty = 0i64;
    for movement in movements {
        if movement.product_id != *product_id {
            continue;
        }
        match movement.kind {
            MovementType::Receipt => {
                if movement.to_location_id.as_ref() == Some(location_id) {
                    qty += movement.qty;
                }
            }
            MovementType::Pick => {
                if movement.from_location_id.as_ref() == Some(location_id) {
                    qty -= movement.qty;
                }
            }
            MovementType::Transfer => {
                if movement.from_location_id.as_ref() == Some(location_id) {
                    qty -= movement.qty;
                }
                if movement.to_location_id.as_ref() == Some(location_id) {
                    qty += movement.qty;
                }
            }
        }
    }
    qty
}
