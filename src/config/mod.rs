//! Configuration types for the Stripe API SDK.
//!
//! This module provides the configuration types used to initialize the
//! default HTTP transport.
//!
//! # Overview
//!
//! - [`StripeConfig`]: The main configuration struct holding all SDK settings
//! - [`StripeConfigBuilder`]: A builder for constructing [`StripeConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated API or file-upload host URL
//! - [`ApiVersion`]: The Stripe API version to use
//!
//! # Example
//!
//! ```rust
//! use stripe_api::{StripeConfig, ApiKey, ApiVersion};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiKey, BaseUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Default host for regular API requests.
pub const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";

/// Default host for file-upload requests.
pub const DEFAULT_FILES_BASE_URL: &str = "https://files.stripe.com";

/// Configuration for the Stripe API SDK.
///
/// `StripeConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use stripe_api::{StripeConfig, ApiKey, BaseUrl};
///
/// let config = StripeConfig::builder()
///     .api_key(ApiKey::new("sk_test_123").unwrap())
///     .api_base_url(BaseUrl::new("http://localhost:12111").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_base_url().as_ref(), "http://localhost:12111");
/// assert_eq!(config.files_base_url().as_ref(), "https://files.stripe.com");
/// ```
#[derive(Clone, Debug)]
pub struct StripeConfig {
    api_key: ApiKey,
    api_version: ApiVersion,
    api_base_url: BaseUrl,
    files_base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl StripeConfig {
    /// Creates a new builder for constructing a `StripeConfig`.
    #[must_use]
    pub fn builder() -> StripeConfigBuilder {
        StripeConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the host used for regular API requests.
    #[must_use]
    pub const fn api_base_url(&self) -> &BaseUrl {
        &self.api_base_url
    }

    /// Returns the host used for file-upload requests.
    #[must_use]
    pub const fn files_base_url(&self) -> &BaseUrl {
        &self.files_base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StripeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StripeConfig>();
};

/// Builder for constructing [`StripeConfig`] instances.
///
/// `api_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `api_version`: Latest known version
/// - `api_base_url`: [`DEFAULT_API_BASE_URL`]
/// - `files_base_url`: [`DEFAULT_FILES_BASE_URL`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StripeConfigBuilder {
    api_key: Option<ApiKey>,
    api_version: Option<ApiVersion>,
    api_base_url: Option<BaseUrl>,
    files_base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl StripeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Overrides the API host, e.g. to point at a local mock server.
    #[must_use]
    pub fn api_base_url(mut self, url: BaseUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Overrides the file-upload host.
    #[must_use]
    pub fn files_base_url(mut self, url: BaseUrl) -> Self {
        self.files_base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StripeConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<StripeConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let api_base_url = match self.api_base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_API_BASE_URL)?,
        };
        let files_base_url = match self.files_base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_FILES_BASE_URL)?,
        };

        Ok(StripeConfig {
            api_key,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            api_base_url,
            files_base_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
