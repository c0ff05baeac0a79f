use leptos::prelude::*;
use serde::Deserialize;

use crate::domain::picklist_field::PicklistButtons;
use crate::shared::toast::{ToastHost, ToastService};

/// Component configuration, read once from the page query string and
/// immutable afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PicklistConfig {
    #[serde(rename = "recordId", default)]
    pub record_id: String,

    #[serde(rename = "objectApiName", default)]
    pub object_api_name: String,

    /// Display label, passed through to the heading.
    #[serde(default)]
    pub label: String,

    #[serde(rename = "fieldName", default)]
    pub qualified_field_name: String,
}

impl PicklistConfig {
    /// Parse from the current window location query string.
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn is_complete(&self) -> bool {
        !self.record_id.is_empty()
            && !self.object_api_name.is_empty()
            && !self.qualified_field_name.is_empty()
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the toast dispatcher to the whole app via context
    provide_context(ToastService::new());

    let config = PicklistConfig::from_location();

    view! {
        <ToastHost />
        {if config.is_complete() {
            view! {
                <PicklistButtons
                    record_id=config.record_id
                    object_api_name=config.object_api_name
                    label=config.label
                    qualified_field_name=config.qualified_field_name
                />
            }
            .into_any()
        } else {
            view! {
                <div class="config-hint">
                    "Set the recordId, objectApiName and fieldName query parameters."
                </div>
            }
            .into_any()
        }}
    }
}
