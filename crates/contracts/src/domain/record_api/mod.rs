pub mod field_ref;
pub mod object_info;
pub mod picklist;
pub mod record;

pub use field_ref::FieldReference;
pub use object_info::ObjectInfo;
pub use picklist::{PicklistEntry, PicklistValuesResponse};
pub use record::{FieldValue, RecordSnapshot, RecordTypeInfo, RecordUpdateInput};
