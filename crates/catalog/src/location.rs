use serde::{Deserialize, Serialize};

use stockroom_core::LocationId;

/// A warehouse location (bin/aisle) reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
}
