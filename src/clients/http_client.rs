//! HTTP transport for Stripe API communication.
//!
//! This module provides [`HttpClient`], the reqwest-backed [`Transport`]
//! used when no other transport is injected.

use std::collections::HashMap;

use base64::prelude::*;
use serde_json::Value;

use crate::clients::errors::{ApiError, ApiResponseError};
use crate::clients::http_request::{encode_form, Headers, HttpMethod, Params, RequestOptions};
use crate::clients::transport::Transport;
use crate::config::{ApiKey, StripeConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Path prefix shared by every endpoint.
pub const API_PATH_PREFIX: &str = "/v1";

/// HTTP client for making requests to the Stripe API.
///
/// The client handles:
/// - URL construction against the API or file-upload host
/// - Authentication, version, connected-account and idempotency headers
/// - Bracket-notation encoding of params into the query string or form body
/// - Mapping non-2xx responses to [`ApiError::Response`]
///
/// Requests are sent exactly once; there is no retry loop.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use stripe_api::{ApiKey, StripeConfig};
/// use stripe_api::clients::{HttpClient, HttpMethod, Params, RequestOptions, Transport};
///
/// let config = StripeConfig::builder()
///     .api_key(ApiKey::new("sk_test_123").unwrap())
///     .build()
///     .unwrap();
/// let client = HttpClient::new(&config);
///
/// let body = client
///     .request(&Params::new(), HttpMethod::Get, "balance", &Default::default(), &RequestOptions::new())
///     .await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// API host (e.g., `https://api.stripe.com`).
    api_base_url: String,
    /// File-upload host (e.g., `https://files.stripe.com`).
    files_base_url: String,
    /// Key used when the call does not override it.
    api_key: ApiKey,
    /// Version used when the call does not override it.
    api_version: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &StripeConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Stripe API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base_url: config.api_base_url().as_ref().to_string(),
            files_base_url: config.files_base_url().as_ref().to_string(),
            api_key: config.api_key().clone(),
            api_version: config.api_version().to_string(),
            default_headers,
        }
    }

    /// Returns the API host for this client.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Returns the file-upload host for this client.
    #[must_use]
    pub fn files_base_url(&self) -> &str {
        &self.files_base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the complete header set for one call.
    fn build_headers(
        &self,
        method: HttpMethod,
        headers: &Headers,
        options: &RequestOptions,
    ) -> HashMap<String, String> {
        let mut merged = self.default_headers.clone();

        let api_key = options
            .api_key
            .as_deref()
            .unwrap_or_else(|| self.api_key.as_ref());
        merged.insert("Authorization".to_string(), format!("Bearer {api_key}"));

        let api_version = options.api_version.as_deref().unwrap_or(&self.api_version);
        merged.insert("Stripe-Version".to_string(), api_version.to_string());

        if let Some(account) = &options.connect_account {
            merged.insert("Stripe-Account".to_string(), account.clone());
        }

        if method == HttpMethod::Post {
            let key = options
                .idempotency_key
                .clone()
                .unwrap_or_else(generate_idempotency_key);
            merged.insert("Idempotency-Key".to_string(), key);
        }

        for (key, value) in headers {
            merged.insert(key.clone(), value.clone());
        }

        merged
    }

    async fn send(
        &self,
        base_url: &str,
        params: &Params,
        method: HttpMethod,
        endpoint: &str,
        headers: &Headers,
        options: &RequestOptions,
    ) -> Result<Value, ApiError> {
        let path = normalize_endpoint(endpoint)?;
        let url = format!("{base_url}{API_PATH_PREFIX}/{path}");

        let mut req_builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.build_headers(method, headers, options) {
            req_builder = req_builder.header(key, value);
        }

        let pairs = encode_form(params);
        if method.has_body() {
            req_builder = req_builder.form(&pairs);
        } else if !pairs.is_empty() {
            req_builder = req_builder.query(&pairs);
        }

        tracing::debug!("Sending {} request to {}", method, url);

        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let request_id = res
            .headers()
            .get("request-id")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let body_text = res.text().await?;

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        if (200..300).contains(&status) {
            Ok(body)
        } else {
            Err(ApiResponseError::from_body(status, &body, request_id).into())
        }
    }
}

impl Transport for HttpClient {
    async fn request(
        &self,
        params: &Params,
        method: HttpMethod,
        endpoint: &str,
        headers: &Headers,
        options: &RequestOptions,
    ) -> Result<Value, ApiError> {
        self.send(&self.api_base_url, params, method, endpoint, headers, options)
            .await
    }

    async fn request_file_upload(
        &self,
        params: &Params,
        method: HttpMethod,
        endpoint: &str,
        headers: &Headers,
        options: &RequestOptions,
    ) -> Result<Value, ApiError> {
        self.send(&self.files_base_url, params, method, endpoint, headers, options)
            .await
    }
}

/// Normalizes an endpoint into a path relative to [`API_PATH_PREFIX`].
///
/// Leading `/` characters and an explicit `v1/` prefix are stripped. An
/// endpoint that is empty afterwards is rejected.
fn normalize_endpoint(endpoint: &str) -> Result<&str, ApiError> {
    let path = endpoint.trim_start_matches('/');
    let path = path.strip_prefix("v1/").unwrap_or(path);

    if path.is_empty() || path == "v1" {
        return Err(ApiError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
        });
    }

    Ok(path)
}

/// Generates a random idempotency key from 32 bytes of entropy.
fn generate_idempotency_key() -> String {
    let bytes: [u8; 32] = rand::random();
    BASE64_URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseUrl;

    fn create_test_config() -> StripeConfig {
        StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_config_hosts() {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .api_base_url(BaseUrl::new("http://localhost:12111").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        assert_eq!(client.api_base_url(), "http://localhost:12111");
        assert_eq!(client.files_base_url(), "https://files.stripe.com");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Stripe API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_build_headers_uses_config_defaults() {
        let client = HttpClient::new(&create_test_config());

        let headers = client.build_headers(HttpMethod::Get, &Headers::new(), &RequestOptions::new());

        assert_eq!(
            headers.get("Authorization"),
            Some(&"Bearer sk_test_123".to_string())
        );
        assert_eq!(headers.get("Stripe-Version"), Some(&"2024-06-20".to_string()));
        assert!(headers.get("Stripe-Account").is_none());
        assert!(headers.get("Idempotency-Key").is_none());
    }

    #[test]
    fn test_build_headers_sends_older_configured_version_verbatim() {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .api_version("2020-08-27".parse().unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let headers = client.build_headers(HttpMethod::Get, &Headers::new(), &RequestOptions::new());

        assert_eq!(headers.get("Stripe-Version"), Some(&"2020-08-27".to_string()));
    }

    #[test]
    fn test_build_headers_applies_overrides() {
        let client = HttpClient::new(&create_test_config());
        let options = RequestOptions::new()
            .api_key("sk_test_other")
            .api_version("2023-10-16")
            .connect_account("acct_1")
            .idempotency_key("order-42");
        let mut extra = Headers::new();
        extra.insert("X-Custom-Header".to_string(), "custom-value".to_string());

        let headers = client.build_headers(HttpMethod::Post, &extra, &options);

        assert_eq!(
            headers.get("Authorization"),
            Some(&"Bearer sk_test_other".to_string())
        );
        assert_eq!(headers.get("Stripe-Version"), Some(&"2023-10-16".to_string()));
        assert_eq!(headers.get("Stripe-Account"), Some(&"acct_1".to_string()));
        assert_eq!(headers.get("Idempotency-Key"), Some(&"order-42".to_string()));
        assert_eq!(
            headers.get("X-Custom-Header"),
            Some(&"custom-value".to_string())
        );
    }

    #[test]
    fn test_post_without_key_generates_idempotency_key() {
        let client = HttpClient::new(&create_test_config());

        let first = client.build_headers(HttpMethod::Post, &Headers::new(), &RequestOptions::new());
        let second = client.build_headers(HttpMethod::Post, &Headers::new(), &RequestOptions::new());

        let first_key = first.get("Idempotency-Key").unwrap();
        assert_eq!(first_key.len(), 43);
        assert_ne!(Some(first_key), second.get("Idempotency-Key"));
    }

    #[test]
    fn test_normalize_endpoint() {
        assert_eq!(normalize_endpoint("customers").unwrap(), "customers");
        assert_eq!(normalize_endpoint("/customers/cus_1").unwrap(), "customers/cus_1");
        assert_eq!(normalize_endpoint("/v1/customers").unwrap(), "customers");
    }

    #[test]
    fn test_normalize_endpoint_rejects_empty() {
        assert!(matches!(
            normalize_endpoint(""),
            Err(ApiError::InvalidEndpoint { endpoint }) if endpoint.is_empty()
        ));
        assert!(normalize_endpoint("/").is_err());
        assert!(normalize_endpoint("/v1/").is_err());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
