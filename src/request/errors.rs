//! Error type for request building, dispatch and pagination.
//!
//! Transport failures arrive as [`ApiError`] and are wrapped in
//! [`RequestError::Api`] without modification. The remaining variants are
//! raised by the request core itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::request::{retrieve_all, RequestError};
//!
//! match retrieve_all::<serde_json::Value, _>(&client, "customers", &options).await {
//!     Ok(page) => println!("{} customers", page.len()),
//!     Err(RequestError::Api(e)) => println!("Stripe rejected a page: {}", e),
//!     Err(e) => println!("Request error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::clients::{ApiError, InvalidHttpMethodError};

/// Errors produced by the request core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The transport failed. The inner error is passed through untouched.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A verb other than GET, POST, PUT, PATCH or DELETE was supplied.
    #[error(transparent)]
    InvalidMethod(#[from] InvalidHttpMethodError),

    /// A next-page cursor was requested from a page without items.
    #[error("Cannot derive a pagination cursor from a page with no items.")]
    EmptyPage,

    /// The last item of the page carries no `id` to use as a cursor.
    #[error("The last item of the page has no id to use as a pagination cursor.")]
    MissingCursor,

    /// The page does not record the endpoint it was fetched from.
    #[error("The page has no url to fetch the next page from.")]
    MissingPageUrl,

    /// The request was dispatched before a method was set.
    #[error("Cannot dispatch a request without a method. Call put_method first.")]
    MissingMethod,

    /// The request was dispatched before an endpoint was set.
    #[error("Cannot dispatch a request without an endpoint. Call put_endpoint first.")]
    MissingEndpoint,

    /// A successful payload did not fit the requested type.
    #[error("Failed to materialize response: {message}")]
    Materialize {
        /// The deserialization error.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ApiResponseError;

    #[test]
    fn test_api_error_passes_through_unchanged() {
        let api_error = ApiError::Response(ApiResponseError {
            status: 404,
            error_type: "invalid_request_error".to_string(),
            code: Some("resource_missing".to_string()),
            message: "No such customer: 'cus_404'".to_string(),
            param: Some("id".to_string()),
            request_id: Some("req_1".to_string()),
        });

        let error = RequestError::from(api_error.clone());

        assert_eq!(error, RequestError::Api(api_error));
        assert_eq!(error.to_string(), "No such customer: 'cus_404'");
    }

    #[test]
    fn test_invalid_method_message_names_the_verb() {
        let error = RequestError::from(InvalidHttpMethodError {
            method: "OPTIONS".to_string(),
        });
        assert!(error.to_string().contains("OPTIONS"));
    }

    #[test]
    fn test_empty_page_message() {
        assert!(RequestError::EmptyPage.to_string().contains("no items"));
    }
}
