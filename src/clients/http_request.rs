//! Request-side types shared by every transport.
//!
//! This module provides the [`HttpMethod`] enum, the [`Params`] and
//! [`Headers`] maps handed to a transport, per-call [`RequestOptions`], and
//! the bracket-notation form encoding the Stripe API expects.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::clients::errors::InvalidHttpMethodError;

/// Request parameters keyed by name. Keys are unique; inserting an existing
/// key replaces its value.
pub type Params = BTreeMap<String, Value>;

/// Extra request headers.
pub type Headers = HashMap<String, String>;

/// HTTP methods supported by the Stripe API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating and updating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partially updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if parameters travel in the request body rather than
    /// the query string.
    #[must_use]
    pub const fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl FromStr for HttpMethod {
    type Err = InvalidHttpMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            "put" => Ok(Self::Put),
            "patch" => Ok(Self::Patch),
            "delete" => Ok(Self::Delete),
            _ => Err(InvalidHttpMethodError {
                method: s.to_string(),
            }),
        }
    }
}

/// Per-call options forwarded to the transport.
///
/// Every field overrides the corresponding transport default for one call.
///
/// # Example
///
/// ```rust
/// use stripe_api::clients::RequestOptions;
///
/// let options = RequestOptions::new()
///     .connect_account("acct_123")
///     .idempotency_key("order-42");
///
/// assert_eq!(options.connect_account.as_deref(), Some("acct_123"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// API key used instead of the configured one.
    pub api_key: Option<String>,
    /// API version used instead of the configured one.
    pub api_version: Option<String>,
    /// Connected account the call is made on behalf of (`Stripe-Account`).
    pub connect_account: Option<String>,
    /// Idempotency key for POST requests. Generated when absent.
    pub idempotency_key: Option<String>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key override.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the API version override.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets the connected account.
    #[must_use]
    pub fn connect_account(mut self, account: impl Into<String>) -> Self {
        self.connect_account = Some(account.into());
        self
    }

    /// Sets the idempotency key.
    #[must_use]
    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }
}

/// Flattens params into `key=value` pairs using bracket notation.
///
/// Nested objects become `parent[child]`, arrays become `parent[0]`, and
/// `null` values are skipped.
///
/// # Example
///
/// ```rust
/// use stripe_api::clients::{encode_form, Params};
/// use serde_json::json;
///
/// let mut params = Params::new();
/// params.insert("metadata".to_string(), json!({"order": "42"}));
/// params.insert("expand".to_string(), json!(["customer"]));
///
/// assert_eq!(
///     encode_form(&params),
///     vec![
///         ("expand[0]".to_string(), "customer".to_string()),
///         ("metadata[order]".to_string(), "42".to_string()),
///     ]
/// );
/// ```
#[must_use]
pub fn encode_form(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        encode_value(key, value, &mut pairs);
    }
    pairs
}

fn encode_value(prefix: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((prefix.to_string(), s.clone())),
        Value::Number(n) => pairs.push((prefix.to_string(), n.to_string())),
        Value::Bool(b) => pairs.push((prefix.to_string(), b.to_string())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                encode_value(&format!("{prefix}[{index}]"), item, pairs);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                encode_value(&format!("{prefix}[{key}]"), item, pairs);
            }
        }
    }
}
