use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Record type carried by a record snapshot. Absent when the object has no
/// record types enabled for the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordTypeInfo {
    #[serde(rename = "recordTypeId")]
    pub record_type_id: String,
}

/// Value of one record field. Null on the wire maps to `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldValue {
    #[serde(default)]
    pub value: Option<String>,
}

/// The subset of record data the component reads: the optional record type
/// and the requested fields keyed by bare field name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSnapshot {
    pub id: String,

    #[serde(rename = "recordTypeInfo", default)]
    pub record_type_info: Option<RecordTypeInfo>,

    #[serde(default)]
    pub fields: HashMap<String, FieldValue>,
}

/// Update payload for the record endpoint: the record id plus the edited
/// fields, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordUpdateInput {
    pub fields: HashMap<String, String>,
}

impl RecordUpdateInput {
    /// Build an update that sets exactly one field on one record.
    pub fn single_field(record_id: &str, field_name: &str, value: &str) -> Self {
        let mut fields = HashMap::new();
        fields.insert("Id".to_string(), record_id.to_string());
        fields.insert(field_name.to_string(), value.to_string());
        Self { fields }
    }

    pub fn record_id(&self) -> Option<&str> {
        self.fields.get("Id").map(String::as_str)
    }
}
