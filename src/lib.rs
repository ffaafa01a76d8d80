//! # Stripe API Rust SDK
//!
//! A Rust SDK for the Stripe API, providing type-safe configuration, an
//! immutable request builder, response normalization and cursor pagination
//! over list endpoints.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StripeConfig`] and [`StripeConfigBuilder`]
//! - Validated newtypes for API credentials and hosts
//! - An immutable request builder via [`request::Request`]
//! - Cursor pagination via [`request::retrieve_all`] and friends
//! - A pluggable [`Transport`] with an async reqwest-backed [`HttpClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use stripe_api::{StripeConfig, ApiKey, ApiVersion, HttpClient};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config);
//! assert_eq!(client.api_base_url(), "https://api.stripe.com");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use stripe_api::request::Request;
//! use stripe_api::{HttpClient, HttpMethod};
//! use serde_json::json;
//!
//! let charge: serde_json::Value = Request::default()
//!     .put_method(HttpMethod::Post)
//!     .put_endpoint("charges")
//!     .put_param("amount", 2000)
//!     .put_param("currency", "usd")
//!     .put_param("customer", json!({"id": "cus_123"}))
//!     .cast_to_id(["customer"])
//!     .make_request(&client)
//!     .await?;
//! ```
//!
//! ## Pagination
//!
//! ```rust,ignore
//! use stripe_api::request::{retrieve_all, retrieve_many, retrieve_next, Page, PaginationParams};
//! use stripe_api::RequestOptions;
//!
//! // One page at a time
//! let first: Page<serde_json::Value> =
//!     retrieve_many(&client, &PaginationParams::new().limit(10), "customers", &options).await?;
//! if first.has_more {
//!     let second: Page<serde_json::Value> = retrieve_next(&client, &first, &options).await?;
//! }
//!
//! // Or everything at once
//! let all: Page<serde_json::Value> = retrieve_all(&client, "customers", &options).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Immutable requests**: Builder methods return new values

pub mod clients;
pub mod config;
pub mod error;
pub mod request;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, ApiVersion, BaseUrl, StripeConfig, StripeConfigBuilder};
pub use error::ConfigError;

// Re-export transport types
pub use clients::{
    ApiError, ApiResponseError, Headers, HttpClient, HttpMethod, InvalidHttpMethodError, Params,
    RequestOptions, Transport,
};

// Re-export the request core
pub use request::{Page, PaginationParams, Request, RequestError};
