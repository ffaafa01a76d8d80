//! Single-call entry points that are not paginated.

use serde::de::DeserializeOwned;

use crate::clients::{Headers, HttpMethod, Params, RequestOptions, Transport};
use crate::request::changeset::{cast, Intent, Schema};
use crate::request::{handle_result, RequestError};

/// Creates an object by POSTing the changes `schema` permits on create.
///
/// Changes the schema does not permit for [`Intent::Create`] are dropped
/// before the request is sent.
///
/// # Errors
///
/// Returns [`RequestError::Api`] if the transport fails and
/// [`RequestError::Materialize`] if the payload does not fit `T`.
///
/// # Example
///
/// ```rust,ignore
/// use stripe_api::request::{create, Intent, Schema};
///
/// let schema = Schema::new().field("email", &[Intent::Create]);
/// let customer: serde_json::Value =
///     create(&client, "customers", &changes, &schema, &RequestOptions::new()).await?;
/// ```
pub async fn create<T, R>(
    transport: &R,
    endpoint: &str,
    changes: &Params,
    schema: &Schema,
    options: &RequestOptions,
) -> Result<T, RequestError>
where
    T: DeserializeOwned,
    R: Transport,
{
    let params = cast(changes, schema, Intent::Create);
    tracing::debug!("Creating object at {} with {} field(s)", endpoint, params.len());

    let outcome = transport
        .request(&params, HttpMethod::Post, endpoint, &Headers::new(), options)
        .await;
    handle_result(outcome)
}

/// Retrieves a resource through the transport's file-upload entry point.
///
/// The request is a GET without parameters.
///
/// # Errors
///
/// Same as [`create`].
pub async fn retrieve_file_upload<T, R>(
    transport: &R,
    endpoint: &str,
    options: &RequestOptions,
) -> Result<T, RequestError>
where
    T: DeserializeOwned,
    R: Transport,
{
    let outcome = transport
        .request_file_upload(
            &Params::new(),
            HttpMethod::Get,
            endpoint,
            &Headers::new(),
            options,
        )
        .await;
    handle_result(outcome)
}
