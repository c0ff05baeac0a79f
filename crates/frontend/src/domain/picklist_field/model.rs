//! Data access for the picklist field component.
//!
//! Wraps the record API endpoints: object metadata, record-type-scoped
//! picklist values, record retrieval and record update. Non-2xx responses
//! are decoded into the shared `ApiError` envelope so callers can reduce
//! them to display messages.

use contracts::domain::record_api::{
    FieldReference, ObjectInfo, PicklistValuesResponse, RecordSnapshot, RecordUpdateInput,
};
use contracts::shared::errors::ApiError;
use gloo_net::http::{Request, Response};
use serde_json::Value;

use crate::shared::api_utils::api_url;

async fn response_error(response: Response) -> ApiError {
    let status_text = response.status_text();
    let body = response.json::<Value>().await.ok();
    ApiError::http(status_text, body)
}

fn transport_error(error: gloo_net::Error) -> ApiError {
    ApiError::message(error.to_string())
}

/// Object metadata, including the default record type id.
pub async fn fetch_object_info(object_api_name: &str) -> Result<ObjectInfo, ApiError> {
    let url = api_url(&format!(
        "/api/ui/object-info/{}",
        urlencoding::encode(object_api_name)
    ));
    let response = Request::get(&url).send().await.map_err(transport_error)?;
    if !response.ok() {
        return Err(response_error(response).await);
    }
    response.json::<ObjectInfo>().await.map_err(transport_error)
}

/// Picklist values for one field, scoped to a record type.
pub async fn fetch_picklist_values(
    record_type_id: &str,
    field: &FieldReference,
) -> Result<PicklistValuesResponse, ApiError> {
    let url = api_url(&format!(
        "/api/ui/picklist-values/{}/{}",
        urlencoding::encode(record_type_id),
        urlencoding::encode(field.qualified())
    ));
    let response = Request::get(&url).send().await.map_err(transport_error)?;
    if !response.ok() {
        return Err(response_error(response).await);
    }
    response
        .json::<PicklistValuesResponse>()
        .await
        .map_err(transport_error)
}

/// Record snapshot restricted to the requested field.
pub async fn fetch_record(
    record_id: &str,
    field: &FieldReference,
) -> Result<RecordSnapshot, ApiError> {
    let url = api_url(&format!(
        "/api/ui/records/{}?fields={}",
        urlencoding::encode(record_id),
        urlencoding::encode(field.qualified())
    ));
    let response = Request::get(&url).send().await.map_err(transport_error)?;
    if !response.ok() {
        return Err(response_error(response).await);
    }
    response.json::<RecordSnapshot>().await.map_err(transport_error)
}

/// Persist edited fields. The server validates the values; invalid input
/// comes back as an error body.
pub async fn update_record(input: &RecordUpdateInput) -> Result<(), ApiError> {
    let record_id = input.record_id().unwrap_or_default();
    let url = api_url(&format!(
        "/api/ui/records/{}",
        urlencoding::encode(record_id)
    ));
    let response = Request::patch(&url)
        .json(input)
        .map_err(transport_error)?
        .send()
        .await
        .map_err(transport_error)?;
    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}
