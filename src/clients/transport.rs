//! The transport seam between the request core and the network.

use serde_json::Value;

use crate::clients::errors::ApiError;
use crate::clients::http_request::{Headers, HttpMethod, Params, RequestOptions};

/// Performs API calls on behalf of the request core.
///
/// A transport receives an already-resolved endpoint path and returns the
/// decoded JSON body of a successful response, or an [`ApiError`]. The core
/// never inspects the error; it forwards it to its caller unchanged.
///
/// [`HttpClient`](crate::clients::HttpClient) is the default implementation.
/// Tests substitute scripted in-memory transports.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a request to the regular API host.
    async fn request(
        &self,
        params: &Params,
        method: HttpMethod,
        endpoint: &str,
        headers: &Headers,
        options: &RequestOptions,
    ) -> Result<Value, ApiError>;

    /// Sends a request to the file-upload host.
    async fn request_file_upload(
        &self,
        params: &Params,
        method: HttpMethod,
        endpoint: &str,
        headers: &Headers,
        options: &RequestOptions,
    ) -> Result<Value, ApiError>;
}
