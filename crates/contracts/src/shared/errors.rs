use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error envelope produced by record API calls. The body shape varies by
/// endpoint and failure mode: read errors carry a list of details, write and
/// network errors a structured object, client-side failures only a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub body: Option<Value>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(rename = "statusText", default)]
    pub status_text: Option<String>,
}

impl ApiError {
    /// Client-side failure with a plain message (network error, decode
    /// error).
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Non-2xx response with an optional JSON body.
    pub fn http(status_text: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            body,
            status_text: Some(status_text.into()),
            ..Self::default()
        }
    }
}

/// Flatten errors of heterogeneous shape into human-readable messages.
/// `None` entries and empty strings are dropped; never fails, the worst case
/// is an empty result.
pub fn reduce_errors(errors: &[Option<ApiError>]) -> Vec<String> {
    errors
        .iter()
        .flatten()
        .flat_map(extract_messages)
        .filter(|message| !message.is_empty())
        .collect()
}

/// Single-error display form: the reduced messages joined with `", "`.
pub fn reduced_message(error: &ApiError) -> String {
    reduce_errors(&[Some(error.clone())]).join(", ")
}

fn extract_messages(error: &ApiError) -> Vec<String> {
    if let Some(body) = &error.body {
        // Read errors: list of details, one message per item
        if let Some(items) = body.as_array() {
            return items
                .iter()
                .filter_map(|item| item.get("message").and_then(Value::as_str))
                .map(str::to_string)
                .collect();
        }
        // Write errors: structured body with a message
        if let Some(message) = body.get("message").and_then(Value::as_str) {
            return vec![message.to_string()];
        }
    }
    // Client-side errors
    if let Some(message) = &error.message {
        return vec![message.clone()];
    }
    // Unknown shape, fall back to the HTTP status text (possibly empty)
    vec![error.status_text.clone().unwrap_or_default()]
}
