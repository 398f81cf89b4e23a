use serde::{Deserialize, Serialize};

use stockroom_core::{LocationId, ProductId};

/// A product reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit of measure, e.g. "EA", "BOX".
    pub uom: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_location_id: Option<LocationId>,
}
