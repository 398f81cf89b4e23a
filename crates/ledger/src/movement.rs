//! Movement types and write drafts.
//!
//! A [`Movement`] is an immutable fact in the append-only log. Callers never
//! construct one directly: they submit a draft, the draft becomes an
//! [`UncommittedMovement`] (no id yet), and the log assigns the id on append.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, LocationId, MovementId, ProductId};

/// Stock movement kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementType {
    Receipt,
    Pick,
    Transfer,
}

/// An immutable record of one stock event.
///
/// Wire shape matches the persisted layout: camelCase fields, `type` for the
/// kind, `ref` for the external reference, locations omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: MovementId,
    #[serde(rename = "type")]
    pub kind: MovementType,
    pub product_id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_location_id: Option<LocationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_location_id: Option<LocationId>,
    pub qty: i64,
    #[serde(rename = "ref")]
    pub reference: String,
    pub timestamp: DateTime<Utc>,
}

impl Movement {
    /// Per-location signed balance deltas implied by this movement:
    /// a receipt adds at `to`, a pick subtracts at `from`, a transfer does
    /// both (source leg first).
    pub fn balance_deltas(&self) -> Vec<(LocationId, i64)> {
        let mut deltas = Vec::with_capacity(2);
        if let Some(from) = &self.from_location_id {
            deltas.push((from.clone(), -self.qty));
        }
        if let Some(to) = &self.to_location_id {
            deltas.push((to.clone(), self.qty));
        }
        deltas
    }
}

/// A movement ready to be appended, before the log assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncommittedMovement {
    pub kind: MovementType,
    pub product_id: ProductId,
    pub to_location_id: Option<LocationId>,
    pub from_location_id: Option<LocationId>,
    pub qty: i64,
    pub reference: String,
    pub timestamp: DateTime<Utc>,
}

impl UncommittedMovement {
    /// Check the movement-shape invariants: positive quantity, non-blank
    /// codes, and the location pattern required by the kind.
    pub fn validate(&self) -> DomainResult<()> {
        ensure_not_blank("product id", self.product_id.is_blank())?;
        ensure_positive_qty(self.qty)?;

        match self.kind {
            MovementType::Receipt => {
                let to = require_location("to location", self.to_location_id.as_ref())?;
                ensure_not_blank("to location", to.is_blank())?;
                if self.from_location_id.is_some() {
                    return Err(DomainError::validation(
                        "a receipt must not have a source location",
                    ));
                }
            }
            MovementType::Pick => {
                let from = require_location("from location", self.from_location_id.as_ref())?;
                ensure_not_blank("from location", from.is_blank())?;
                if self.to_location_id.is_some() {
                    return Err(DomainError::validation(
                        "a pick must not have a destination location",
                    ));
                }
            }
            MovementType::Transfer => {
                let from = require_location("from location", self.from_location_id.as_ref())?;
                let to = require_location("to location", self.to_location_id.as_ref())?;
                ensure_not_blank("from location", from.is_blank())?;
                ensure_not_blank("to location", to.is_blank())?;
                if from == to {
                    return Err(DomainError::validation(
                        "transfer source and destination must differ",
                    ));
                }
            }
        }

        Ok(())
    }

    pub(crate) fn into_movement(self, id: MovementId) -> Movement {
        Movement {
            id,
            kind: self.kind,
            product_id: self.product_id,
            to_location_id: self.to_location_id,
            from_location_id: self.from_location_id,
            qty: self.qty,
            reference: self.reference,
            timestamp: self.timestamp,
        }
    }
}

/// Draft of a goods receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptDraft {
    pub product_id: ProductId,
    pub to_location_id: LocationId,
    pub qty: i64,
    /// External reference; a date-stamped code is generated when absent.
    pub reference: Option<String>,
}

impl ReceiptDraft {
    pub fn validate(&self) -> DomainResult<()> {
        ensure_not_blank("product id", self.product_id.is_blank())?;
        ensure_not_blank("to location", self.to_location_id.is_blank())?;
        ensure_positive_qty(self.qty)
    }

    pub fn into_uncommitted(self, at: DateTime<Utc>) -> UncommittedMovement {
        UncommittedMovement {
            kind: MovementType::Receipt,
            product_id: self.product_id,
            to_location_id: Some(self.to_location_id),
            from_location_id: None,
            qty: self.qty,
            reference: resolve_reference(self.reference, "GR", at),
            timestamp: at,
        }
    }
}

/// Draft of a pick (dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickDraft {
    pub product_id: ProductId,
    pub from_location_id: LocationId,
    pub qty: i64,
    pub reference: Option<String>,
}

impl PickDraft {
    pub fn validate(&self) -> DomainResult<()> {
        ensure_not_blank("product id", self.product_id.is_blank())?;
        ensure_not_blank("from location", self.from_location_id.is_blank())?;
        ensure_positive_qty(self.qty)
    }

    pub fn into_uncommitted(self, at: DateTime<Utc>) -> UncommittedMovement {
        UncommittedMovement {
            kind: MovementType::Pick,
            product_id: self.product_id,
            to_location_id: None,
            from_location_id: Some(self.from_location_id),
            qty: self.qty,
            reference: resolve_reference(self.reference, "PK", at),
            timestamp: at,
        }
    }
}

/// Draft of a bin-to-bin transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferDraft {
    pub product_id: ProductId,
    pub from_location_id: LocationId,
    pub to_location_id: LocationId,
    pub qty: i64,
    pub reference: Option<String>,
}

impl TransferDraft {
    pub fn validate(&self) -> DomainResult<()> {
        ensure_not_blank("product id", self.product_id.is_blank())?;
        ensure_not_blank("from location", self.from_location_id.is_blank())?;
        ensure_not_blank("to location", self.to_location_id.is_blank())?;
        if self.from_location_id == self.to_location_id {
            return Err(DomainError::validation(
                "transfer source and destination must differ",
            ));
        }
        ensure_positive_qty(self.qty)
    }

    pub fn into_uncommitted(self, at: DateTime<Utc>) -> UncommittedMovement {
        UncommittedMovement {
            kind: MovementType::Transfer,
            product_id: self.product_id,
            to_location_id: Some(self.to_location_id),
            from_location_id: Some(self.from_location_id),
            qty: self.qty,
            reference: resolve_reference(self.reference, "TR", at),
            timestamp: at,
        }
    }
}

fn ensure_not_blank(field: &str, blank: bool) -> DomainResult<()> {
    if blank {
        Err(DomainError::validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

fn ensure_positive_qty(qty: i64) -> DomainResult<()> {
    if qty <= 0 {
        Err(DomainError::validation("qty must be positive"))
    } else {
        Ok(())
    }
}

fn require_location<'a>(
    field: &str,
    location: Option<&'a LocationId>,
) -> DomainResult<&'a LocationId> {
    location.ok_or_else(|| DomainError::validation(format!("{field} is required")))
}

fn resolve_reference(reference: Option<String>, prefix: &str, at: DateTime<Utc>) -> String {
    match reference
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
    {
        Some(r) => r,
        None => format!("{prefix}-{}", at.format("%Y%m%d")),
    }
}
