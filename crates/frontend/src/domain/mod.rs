pub mod picklist_field;
