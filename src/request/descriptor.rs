//! Immutable description of a single API call.
//!
//! A [`Request`] collects an endpoint, a method, parameters and the set of
//! parameter keys to coerce to bare IDs. Every builder method borrows the
//! current value and returns a new one, so a partially built request can be
//! shared and extended along different paths without aliasing.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::request::{Endpoint, Request};
//! use stripe_api::clients::HttpMethod;
//! use serde_json::json;
//!
//! let base = Request::default()
//!     .put_method(HttpMethod::Post)
//!     .put_endpoint("payment_intents")
//!     .cast_to_id(["customer"]);
//!
//! let request = base
//!     .put_param("amount", 2000)
//!     .put_param("customer", json!({"id": "cus_123", "email": "a@example.com"}));
//!
//! assert!(base.params().is_empty());
//! assert_eq!(request.coerced_params().get("customer"), Some(&json!("cus_123")));
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::{Headers, HttpMethod, Params, RequestOptions, Transport};
use crate::request::result::handle_result;
use crate::request::RequestError;

/// Builds an endpoint path from the final parameter map.
pub type EndpointFn = Arc<dyn Fn(&Params) -> String + Send + Sync>;

/// Where a request is sent.
///
/// A deferred endpoint is resolved once, at dispatch, after ID coercion, so
/// the final parameters can shape the path.
#[derive(Clone)]
pub enum Endpoint {
    /// A fixed path.
    Literal(String),
    /// A path computed from the parameters at dispatch time.
    Deferred(EndpointFn),
}

impl Endpoint {
    /// Wraps a closure as a deferred endpoint.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stripe_api::request::Endpoint;
    /// use stripe_api::clients::Params;
    /// use serde_json::json;
    ///
    /// let endpoint = Endpoint::deferred(|params: &Params| {
    ///     format!("customers/{}/sources", params["customer"].as_str().unwrap_or_default())
    /// });
    ///
    /// let mut params = Params::new();
    /// params.insert("customer".to_string(), json!("cus_1"));
    /// assert_eq!(endpoint.resolve(&params), "customers/cus_1/sources");
    /// ```
    pub fn deferred<F>(f: F) -> Self
    where
        F: Fn(&Params) -> String + Send + Sync + 'static,
    {
        Self::Deferred(Arc::new(f))
    }

    /// Resolves the endpoint to a path.
    #[must_use]
    pub fn resolve(&self, params: &Params) -> String {
        match self {
            Self::Literal(path) => path.clone(),
            Self::Deferred(f) => f(params),
        }
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(path) => f.debug_tuple("Literal").field(path).finish(),
            Self::Deferred(_) => f.write_str("Deferred(<fn>)"),
        }
    }
}

impl From<&str> for Endpoint {
    fn from(path: &str) -> Self {
        Self::Literal(path.to_string())
    }
}

impl From<String> for Endpoint {
    fn from(path: String) -> Self {
        Self::Literal(path)
    }
}

/// A not-yet-sent API call.
///
/// `Request::default()` is the empty descriptor: no endpoint, no method, no
/// params, no coercion keys. Completeness is checked only at dispatch.
#[derive(Clone, Debug, Default)]
pub struct Request {
    endpoint: Option<Endpoint>,
    method: Option<HttpMethod>,
    params: Params,
    cast_to_id: BTreeSet<String>,
    headers: Headers,
    options: RequestOptions,
}

// Verify Request is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Request>();
};

impl Request {
    /// Creates an empty request carrying per-call options and extra headers.
    #[must_use]
    pub fn new(options: RequestOptions, headers: Headers) -> Self {
        Self {
            headers,
            options,
            ..Self::default()
        }
    }

    /// Returns a copy with the endpoint set.
    #[must_use]
    pub fn put_endpoint(&self, endpoint: impl Into<Endpoint>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..self.clone()
        }
    }

    /// Returns a copy with the method set.
    #[must_use]
    pub fn put_method(&self, method: HttpMethod) -> Self {
        Self {
            method: Some(method),
            ..self.clone()
        }
    }

    /// Returns a copy with the method parsed from `method`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidMethod`] unless `method` is one of
    /// GET, POST, PUT, PATCH or DELETE (case-insensitive).
    pub fn try_put_method(&self, method: &str) -> Result<Self, RequestError> {
        Ok(self.put_method(method.parse()?))
    }

    /// Returns a copy with one parameter inserted or replaced.
    #[must_use]
    pub fn put_param(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut next = self.clone();
        next.params.insert(key.into(), value.into());
        next
    }

    /// Returns a copy with every entry of `params` inserted or replaced.
    #[must_use]
    pub fn put_params<I, K>(&self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut next = self.clone();
        next.params
            .extend(params.into_iter().map(|(key, value)| (key.into(), value)));
        next
    }

    /// Returns a copy whose coercion set is the union of the current set
    /// and `keys`.
    #[must_use]
    pub fn cast_to_id<I, K>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut next = self.clone();
        next.cast_to_id.extend(keys.into_iter().map(Into::into));
        next
    }

    /// Returns the endpoint, if set.
    #[must_use]
    pub const fn endpoint(&self) -> Option<&Endpoint> {
        self.endpoint.as_ref()
    }

    /// Returns the method, if set.
    #[must_use]
    pub const fn method(&self) -> Option<HttpMethod> {
        self.method
    }

    /// Returns the parameters as set, before coercion.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Returns the keys whose values are coerced to IDs at dispatch.
    #[must_use]
    pub const fn id_keys(&self) -> &BTreeSet<String> {
        &self.cast_to_id
    }

    /// Returns the extra headers.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the per-call options.
    #[must_use]
    pub const fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Returns the parameters with ID coercion applied.
    ///
    /// For every key in the coercion set whose value is an object with an
    /// `id` field, the object is replaced by that `id`. Other values are
    /// left alone.
    #[must_use]
    pub fn coerced_params(&self) -> Params {
        let mut params = self.params.clone();
        for key in &self.cast_to_id {
            let id = params
                .get(key)
                .and_then(|value| value.as_object())
                .and_then(|object| object.get("id"))
                .cloned();
            if let Some(id) = id {
                params.insert(key.clone(), id);
            }
        }
        params
    }

    /// Dispatches the request through `transport` and materializes the
    /// response as `T`.
    ///
    /// ID coercion runs first, then the endpoint is resolved against the
    /// coerced parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingMethod`] or
    /// [`RequestError::MissingEndpoint`] for an incomplete request,
    /// [`RequestError::Api`] if the transport fails, and
    /// [`RequestError::Materialize`] if the payload does not fit `T`.
    pub async fn make_request<T, R>(&self, transport: &R) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        R: Transport,
    {
        let (method, endpoint, params) = self.prepare()?;
        tracing::debug!("Dispatching {} request to {}", method, endpoint);

        let outcome = transport
            .request(&params, method, &endpoint, &self.headers, &self.options)
            .await;
        handle_result(outcome)
    }

    /// Like [`make_request`](Self::make_request), but through the
    /// transport's file-upload entry point.
    ///
    /// # Errors
    ///
    /// Same as [`make_request`](Self::make_request).
    pub async fn make_file_upload_request<T, R>(&self, transport: &R) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        R: Transport,
    {
        let (method, endpoint, params) = self.prepare()?;
        tracing::debug!("Dispatching {} file upload request to {}", method, endpoint);

        let outcome = transport
            .request_file_upload(&params, method, &endpoint, &self.headers, &self.options)
            .await;
        handle_result(outcome)
    }

    fn prepare(&self) -> Result<(HttpMethod, String, Params), RequestError> {
        let method = self.method.ok_or(RequestError::MissingMethod)?;
        let endpoint = self.endpoint.as_ref().ok_or(RequestError::MissingEndpoint)?;

        let params = self.coerced_params();
        let path = endpoint.resolve(&params);

        Ok((method, path, params))
    }
}
