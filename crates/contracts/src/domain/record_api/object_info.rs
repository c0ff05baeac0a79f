use serde::{Deserialize, Serialize};

/// Object metadata returned by the object-info endpoint. Only the fields the
/// component consumes are modeled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectInfo {
    #[serde(rename = "apiName")]
    pub api_name: String,

    /// Record type used to scope picklist queries for records that do not
    /// carry their own record type.
    #[serde(rename = "defaultRecordTypeId", default)]
    pub default_record_type_id: Option<String>,
}
