//! ViewModel for the picklist buttons component.
//!
//! Owns the dependency parameters of the three record API feeds and the
//! merge rules that keep them convergent regardless of response order: a
//! record's own record type wins over the object default, the default is
//! adopted only while the record is known to have none, and the picklist
//! query stays suspended until a record type is resolved.

use contracts::domain::record_api::{
    FieldReference, ObjectInfo, PicklistEntry, PicklistValuesResponse, RecordSnapshot,
    RecordUpdateInput,
};
use contracts::shared::errors::{reduced_message, ApiError};
use leptos::prelude::*;

use super::model;
use crate::shared::toast::ToastService;

#[derive(Clone)]
pub struct PicklistFieldVm {
    // Page context, fixed for the component lifetime
    pub record_id: String,
    pub object_api_name: String,
    pub label: String,
    pub field: FieldReference,

    // Feed outputs
    pub record_type_id: RwSignal<Option<String>>,
    pub buttons: RwSignal<Vec<PicklistEntry>>,
    pub picklist_value: RwSignal<Option<String>>,
    pub error_message: RwSignal<Option<String>>,

    // Commit state
    pub saving: RwSignal<bool>,

    // Record type resolution bookkeeping, written only by feed handlers
    has_record_type_id: StoredValue<Option<bool>>,
    default_record_type_id: StoredValue<Option<String>>,
    // Last issued picklist query, so each distinct parameter pair is queried
    // exactly once
    requested_picklist: StoredValue<Option<(String, String)>>,

    toasts: ToastService,
}

impl PicklistFieldVm {
    pub fn new(
        record_id: String,
        object_api_name: String,
        label: String,
        qualified_field_name: String,
        toasts: ToastService,
    ) -> Self {
        Self {
            record_id,
            object_api_name,
            label,
            field: FieldReference::new(qualified_field_name),
            record_type_id: RwSignal::new(None),
            buttons: RwSignal::new(Vec::new()),
            picklist_value: RwSignal::new(None),
            error_message: RwSignal::new(None),
            saving: RwSignal::new(false),
            has_record_type_id: StoredValue::new(None),
            default_record_type_id: StoredValue::new(None),
            requested_picklist: StoredValue::new(None),
            toasts,
        }
    }

    // === Feeds ===

    /// Object info feed. Parameters: object api name, fixed, so this fires
    /// once on mount.
    pub fn load_object_info(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            let result = model::fetch_object_info(&this.object_api_name).await;
            this.on_object_info(result);
        });
    }

    pub fn on_object_info(&self, result: Result<ObjectInfo, ApiError>) {
        match result {
            Ok(info) => {
                self.default_record_type_id
                    .set_value(info.default_record_type_id.clone());
                // The record arrived first and carries no record type of its
                // own: adopt the object default
                if self.has_record_type_id.get_value() == Some(false) {
                    self.record_type_id.set(info.default_record_type_id);
                }
            }
            Err(error) => self.fail("Failed to retrieve object info", &error),
        }
    }

    /// Record feed. Parameters: record id and field reference, both fixed,
    /// so this fires once on mount and again after a successful commit.
    pub fn load_record(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            let result = model::fetch_record(&this.record_id, &this.field).await;
            this.on_record(result);
        });
    }

    pub fn on_record(&self, result: Result<RecordSnapshot, ApiError>) {
        match result {
            Ok(record) => {
                match &record.record_type_info {
                    // The record's own record type always wins
                    Some(info) => {
                        self.has_record_type_id.set_value(Some(true));
                        self.record_type_id.set(Some(info.record_type_id.clone()));
                    }
                    None => {
                        self.has_record_type_id.set_value(Some(false));
                        // Use the object default if it already resolved;
                        // otherwise the object info feed adopts it on arrival
                        if let Some(default_id) = self.default_record_type_id.get_value() {
                            self.record_type_id.set(Some(default_id));
                        }
                    }
                }
                let value = record
                    .fields
                    .get(self.field.field_name())
                    .and_then(|field| field.value.clone());
                self.picklist_value.set(value);
            }
            Err(error) => self.fail("Failed to retrieve record data", &error),
        }
    }

    /// Picklist feed gate. Returns the parameters the next query should use,
    /// or `None` while the record type is unresolved or the current pair has
    /// already been issued. Reads the record type reactively, so an `Effect`
    /// around this re-runs whenever the resolution changes.
    pub fn next_picklist_request(&self) -> Option<(String, String)> {
        let record_type_id = self.record_type_id.get()?;
        let params = (record_type_id, self.field.qualified().to_string());
        if self.requested_picklist.get_value().as_ref() == Some(&params) {
            return None;
        }
        self.requested_picklist.set_value(Some(params.clone()));
        Some(params)
    }

    pub fn load_picklist_values(&self, record_type_id: String) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            let result = model::fetch_picklist_values(&record_type_id, &this.field).await;
            this.on_picklist_values(result);
        });
    }

    pub fn on_picklist_values(&self, result: Result<PicklistValuesResponse, ApiError>) {
        match result {
            // Wholesale replacement, server order preserved
            Ok(data) => self.buttons.set(data.values),
            Err(error) => self.fail("Failed to retrieve picklist values", &error),
        }
    }

    // === Commands ===

    /// Persist a chosen value. The displayed selection is never written
    /// locally; it follows the record feed, which re-fires on success.
    pub fn commit(&self, value: String) {
        let input =
            RecordUpdateInput::single_field(&self.record_id, self.field.field_name(), &value);
        let this = self.clone();
        this.saving.set(true);
        leptos::task::spawn_local(async move {
            let result = model::update_record(&input).await;
            let succeeded = result.is_ok();
            this.on_commit(result);
            if succeeded {
                this.load_record();
            }
        });
    }

    pub fn on_commit(&self, result: Result<(), ApiError>) {
        self.saving.set(false);
        match result {
            Ok(()) => self.toasts.success("Success", "Record updated"),
            Err(error) => self
                .toasts
                .error("Error updating record", &reduced_message(&error)),
        }
    }

    fn fail(&self, context: &str, error: &ApiError) {
        let message = format!("{}: {}", context, reduced_message(error));
        log::error!("{message}");
        self.error_message.set(Some(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::toast::ToastVariant;
    use serde_json::json;
    use std::collections::HashMap;

    fn vm() -> PicklistFieldVm {
        PicklistFieldVm::new(
            "500xx000000001".to_string(),
            "Case".to_string(),
            "Priority".to_string(),
            "Case.Priority".to_string(),
            ToastService::new(),
        )
    }

    fn object_info(default_record_type_id: Option<&str>) -> ObjectInfo {
        ObjectInfo {
            api_name: "Case".to_string(),
            default_record_type_id: default_record_type_id.map(str::to_string),
        }
    }

    fn record(record_type_id: Option<&str>, value: Option<&str>) -> RecordSnapshot {
        let mut fields = HashMap::new();
        fields.insert(
            "Priority".to_string(),
            contracts::domain::record_api::FieldValue {
                value: value.map(str::to_string),
            },
        );
        RecordSnapshot {
            id: "500xx000000001".to_string(),
            record_type_info: record_type_id.map(|id| {
                contracts::domain::record_api::RecordTypeInfo {
                    record_type_id: id.to_string(),
                }
            }),
            fields,
        }
    }

    #[test]
    fn test_record_type_from_record_wins_record_first() {
        let vm = vm();
        vm.on_record(Ok(record(Some("RT2"), Some("High"))));
        vm.on_object_info(Ok(object_info(Some("RT1"))));
        assert_eq!(vm.record_type_id.get_untracked().as_deref(), Some("RT2"));
    }

    #[test]
    fn test_record_type_from_record_wins_object_info_first() {
        let vm = vm();
        vm.on_object_info(Ok(object_info(Some("RT1"))));
        vm.on_record(Ok(record(Some("RT2"), Some("High"))));
        assert_eq!(vm.record_type_id.get_untracked().as_deref(), Some("RT2"));
    }

    #[test]
    fn test_default_applies_when_record_has_no_type() {
        let vm = vm();
        vm.on_object_info(Ok(object_info(Some("RT1"))));
        vm.on_record(Ok(record(None, Some("Low"))));
        assert_eq!(vm.record_type_id.get_untracked().as_deref(), Some("RT1"));
    }

    #[test]
    fn test_default_adopted_late_when_record_arrives_first() {
        let vm = vm();
        vm.on_record(Ok(record(None, Some("Low"))));
        assert!(vm.record_type_id.get_untracked().is_none());
        vm.on_object_info(Ok(object_info(Some("RT1"))));
        assert_eq!(vm.record_type_id.get_untracked().as_deref(), Some("RT1"));
    }

    #[test]
    fn test_picklist_suspended_until_resolved() {
        let vm = vm();
        assert!(vm.next_picklist_request().is_none());
        vm.on_record(Ok(record(None, None)));
        assert!(vm.next_picklist_request().is_none());
    }

    #[test]
    fn test_picklist_issued_once_per_parameter_pair() {
        let vm = vm();
        vm.on_record(Ok(record(None, Some("Low"))));
        vm.on_object_info(Ok(object_info(Some("RT1"))));
        assert_eq!(
            vm.next_picklist_request(),
            Some(("RT1".to_string(), "Case.Priority".to_string()))
        );
        // Same pair again: already issued
        assert!(vm.next_picklist_request().is_none());
        // Record re-resolves to the same type: still no re-issue
        vm.on_record(Ok(record(None, Some("Low"))));
        assert!(vm.next_picklist_request().is_none());
        // A different record type re-arms the query
        vm.on_record(Ok(record(Some("RT2"), Some("Low"))));
        assert_eq!(
            vm.next_picklist_request(),
            Some(("RT2".to_string(), "Case.Priority".to_string()))
        );
    }

    #[test]
    fn test_record_feed_sets_current_value() {
        let vm = vm();
        vm.on_record(Ok(record(Some("RT2"), Some("High"))));
        assert_eq!(vm.picklist_value.get_untracked().as_deref(), Some("High"));
    }

    #[test]
    fn test_missing_field_leaves_value_unset() {
        let vm = vm();
        vm.on_record(Ok(RecordSnapshot {
            id: "500xx000000001".to_string(),
            record_type_info: None,
            fields: HashMap::new(),
        }));
        assert!(vm.picklist_value.get_untracked().is_none());
    }

    #[test]
    fn test_picklist_success_replaces_buttons() {
        let vm = vm();
        vm.on_picklist_values(Ok(PicklistValuesResponse {
            values: vec![
                PicklistEntry {
                    label: "High".to_string(),
                    value: "High".to_string(),
                },
                PicklistEntry {
                    label: "Low".to_string(),
                    value: "Low".to_string(),
                },
            ],
        }));
        let labels: Vec<String> = vm
            .buttons
            .get_untracked()
            .into_iter()
            .map(|entry| entry.label)
            .collect();
        assert_eq!(labels, vec!["High", "Low"]);
    }

    #[test]
    fn test_feed_failures_set_latest_error() {
        let vm = vm();
        vm.on_object_info(Err(ApiError::message("boom")));
        assert_eq!(
            vm.error_message.get_untracked().as_deref(),
            Some("Failed to retrieve object info: boom")
        );
        // A later failure overwrites the slot
        vm.on_picklist_values(Err(ApiError::message("later")));
        assert_eq!(
            vm.error_message.get_untracked().as_deref(),
            Some("Failed to retrieve picklist values: later")
        );
        // Failure leaves the resolution untouched
        assert!(vm.record_type_id.get_untracked().is_none());
    }

    #[test]
    fn test_record_failure_message() {
        let vm = vm();
        vm.on_record(Err(ApiError::http("Not Found", None)));
        assert_eq!(
            vm.error_message.get_untracked().as_deref(),
            Some("Failed to retrieve record data: Not Found")
        );
    }

    #[test]
    fn test_commit_success_notifies_without_touching_selection() {
        let vm = vm();
        vm.on_record(Ok(record(Some("RT2"), Some("High"))));
        vm.saving.set(true);
        vm.on_commit(Ok(()));

        assert!(!vm.saving.get_untracked());
        assert_eq!(vm.picklist_value.get_untracked().as_deref(), Some("High"));
        let toasts = vm.toasts.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].variant, ToastVariant::Success);
        assert_eq!(toasts[0].message, "Record updated");
    }

    #[test]
    fn test_commit_failure_reduces_server_message() {
        let vm = vm();
        vm.on_record(Ok(record(Some("RT2"), Some("High"))));
        vm.on_commit(Err(ApiError::http(
            "Bad Request",
            Some(json!({"message": "FIELD_INTEGRITY_EXCEPTION"})),
        )));

        // Selection untouched, outcome reported transiently
        assert_eq!(vm.picklist_value.get_untracked().as_deref(), Some("High"));
        assert!(vm.error_message.get_untracked().is_none());
        let toasts = vm.toasts.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].variant, ToastVariant::Error);
        assert_eq!(toasts[0].title, "Error updating record");
        assert_eq!(toasts[0].message, "FIELD_INTEGRITY_EXCEPTION");
    }
}
