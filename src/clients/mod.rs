//! Transport layer for Stripe API communication.
//!
//! The request core in [`crate::request`] never talks to the network itself.
//! It hands resolved calls to a [`Transport`]; this module defines that seam
//! and ships the reqwest-backed default.
//!
//! # Overview
//!
//! - [`Transport`]: The injected collaborator that performs API calls
//! - [`HttpClient`]: The default async HTTP transport
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`Params`], [`Headers`], [`RequestOptions`]: What a transport receives
//! - [`ApiError`]: What a transport fails with
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::{ApiKey, StripeConfig};
//! use stripe_api::clients::{HttpClient, HttpMethod, Params, RequestOptions, Transport};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config);
//! let balance = client
//!     .request(&Params::new(), HttpMethod::Get, "balance", &Default::default(), &RequestOptions::new())
//!     .await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod transport;

pub use errors::{ApiError, ApiResponseError, InvalidHttpMethodError};
pub use http_client::{HttpClient, API_PATH_PREFIX, SDK_VERSION};
pub use http_request::{encode_form, Headers, HttpMethod, Params, RequestOptions};
pub use transport::Transport;
