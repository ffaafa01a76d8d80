//! Transport-level error types for the Stripe API SDK.
//!
//! # Error Handling
//!
//! - [`ApiResponseError`]: Non-2xx HTTP responses, carrying Stripe's error object
//! - [`ApiError`]: Unified error produced by a [`Transport`](crate::clients::Transport)
//! - [`InvalidHttpMethodError`]: A verb that is not one of the five supported methods
//!
//! [`ApiError`] is `Clone + PartialEq` so the request layer can forward it
//! untouched and tests can compare it directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::clients::ApiError;
//!
//! match transport.request(&params, HttpMethod::Get, "customers", &headers, &options).await {
//!     Ok(body) => println!("Success: {}", body),
//!     Err(ApiError::Response(e)) => println!("Stripe error {} ({}): {}", e.status, e.error_type, e.message),
//!     Err(ApiError::Network { message }) => println!("Network error: {}", message),
//!     Err(ApiError::InvalidEndpoint { endpoint }) => println!("Bad endpoint: {}", endpoint),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Error returned when the API answers with a non-successful status.
///
/// Fields mirror the `error` object Stripe places in failed response bodies.
///
/// # Example
///
/// ```rust
/// use stripe_api::clients::ApiResponseError;
///
/// let error = ApiResponseError {
///     status: 404,
///     error_type: "invalid_request_error".to_string(),
///     code: Some("resource_missing".to_string()),
///     message: "No such customer: 'cus_123'".to_string(),
///     param: Some("id".to_string()),
///     request_id: Some("req_abc".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "No such customer: 'cus_123'");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// Stripe error type (e.g. `card_error`, `invalid_request_error`).
    pub error_type: String,
    /// Machine-readable error code, if any.
    pub code: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// The parameter the error relates to, if any.
    pub param: Option<String>,
    /// Value of the `Request-Id` response header.
    pub request_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorObject {
    #[serde(rename = "type", default)]
    error_type: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    param: Option<String>,
}

impl ApiResponseError {
    /// Builds an error from a failed response's status, body and request id.
    ///
    /// Bodies that do not contain a Stripe `error` object still produce an
    /// error, typed `api_error`, with a generic message.
    #[must_use]
    pub fn from_body(status: u16, body: &serde_json::Value, request_id: Option<String>) -> Self {
        let object = body
            .get("error")
            .and_then(|e| ErrorObject::deserialize(e).ok())
            .unwrap_or_default();

        Self {
            status,
            error_type: object.error_type.unwrap_or_else(|| "api_error".to_string()),
            code: object.code,
            message: object
                .message
                .unwrap_or_else(|| format!("Request failed with status {status}")),
            param: object.param,
            request_id,
        }
    }
}

/// Unified error type for everything a transport can fail with.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Response(#[from] ApiResponseError),

    /// Network or connection error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the underlying failure.
        message: String,
    },

    /// The resolved endpoint cannot be turned into a request path.
    #[error("Invalid endpoint '{endpoint}'.")]
    InvalidEndpoint {
        /// The endpoint that was rejected.
        endpoint: String,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network {
            message: error.to_string(),
        }
    }
}

/// Error returned when parsing a verb that is not GET, POST, PUT, PATCH or DELETE.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid Http method {method}.")]
pub struct InvalidHttpMethodError {
    /// The invalid method that was provided.
    pub method: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_body_reads_stripe_error_object() {
        let body = json!({
            "error": {
                "type": "card_error",
                "code": "card_declined",
                "message": "Your card was declined.",
                "param": "source"
            }
        });

        let error = ApiResponseError::from_body(402, &body, Some("req_1".to_string()));

        assert_eq!(error.status, 402);
        assert_eq!(error.error_type, "card_error");
        assert_eq!(error.code.as_deref(), Some("card_declined"));
        assert_eq!(error.param.as_deref(), Some("source"));
        assert_eq!(error.request_id.as_deref(), Some("req_1"));
        assert_eq!(error.to_string(), "Your card was declined.");
    }

    #[test]
    fn test_from_body_without_error_object() {
        let error = ApiResponseError::from_body(502, &json!({"raw_body": "bad gateway"}), None);

        assert_eq!(error.error_type, "api_error");
        assert!(error.code.is_none());
        assert!(error.message.contains("502"));
    }

    #[test]
    fn test_api_error_response_is_transparent() {
        let error = ApiError::from(ApiResponseError::from_body(
            400,
            &json!({"error": {"type": "invalid_request_error", "message": "Missing required param: amount."}}),
            None,
        ));

        assert_eq!(error.to_string(), "Missing required param: amount.");
    }

    #[test]
    fn test_invalid_http_method_error_message() {
        let error = InvalidHttpMethodError {
            method: "FETCH".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid Http method FETCH.");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &ApiError::Network {
            message: "connection reset".to_string(),
        };
        let _: &dyn std::error::Error = &InvalidHttpMethodError {
            method: "x".to_string(),
        };
    }
}
