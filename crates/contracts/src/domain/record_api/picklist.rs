use serde::{Deserialize, Serialize};

/// One selectable picklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PicklistEntry {
    pub label: String,
    pub value: String,
}

/// Picklist values for one field, scoped to a record type. Order is the
/// server-provided display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PicklistValuesResponse {
    pub values: Vec<PicklistEntry>,
}
