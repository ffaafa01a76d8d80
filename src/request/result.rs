//! Normalization of raw transport outcomes.
//!
//! A successful payload is materialized into the caller's type by serde
//! deserialization. A transport error is wrapped without modification and
//! materialization is never attempted for it.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::ApiError;
use crate::request::{Page, PaginationParams, RequestError};

/// Materializes a raw payload as `T`.
///
/// Materializing into [`Value`] returns the payload unchanged.
///
/// # Errors
///
/// Returns [`RequestError::Materialize`] if the payload does not fit `T`.
pub fn materialize<T: DeserializeOwned>(payload: Value) -> Result<T, RequestError> {
    serde_json::from_value(payload).map_err(|e| RequestError::Materialize {
        message: e.to_string(),
    })
}

/// Maps a transport outcome to a materialized result.
///
/// # Errors
///
/// Returns [`RequestError::Api`] carrying the transport's error as-is, or
/// [`RequestError::Materialize`] if a successful payload does not fit `T`.
///
/// # Example
///
/// ```rust
/// use stripe_api::request::handle_result;
/// use serde_json::{json, Value};
///
/// let value: Value = handle_result(Ok(json!({"name": "x"}))).unwrap();
/// assert_eq!(value, json!({"name": "x"}));
/// ```
pub fn handle_result<T: DeserializeOwned>(outcome: Result<Value, ApiError>) -> Result<T, RequestError> {
    materialize(outcome?)
}

/// Maps a list-endpoint outcome to a [`Page`] annotated with the `limit`
/// from `pagination` and the `endpoint` just queried.
///
/// # Errors
///
/// Same as [`handle_result`].
pub fn handle_result_list<T: DeserializeOwned>(
    outcome: Result<Value, ApiError>,
    pagination: &PaginationParams,
    endpoint: &str,
) -> Result<Page<T>, RequestError> {
    let page: Page<T> = handle_result(outcome)?;
    Ok(page.with_location(pagination.limit, endpoint))
}
