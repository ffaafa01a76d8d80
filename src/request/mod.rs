//! Request building, response normalization and cursor pagination.
//!
//! This module is the transport-agnostic core of the SDK. Every operation
//! takes a [`Transport`](crate::clients::Transport) and is generic over it,
//! so the same code runs against [`HttpClient`](crate::clients::HttpClient)
//! in production and against an in-memory transport in tests.
//!
//! # Overview
//!
//! - [`Request`]: Immutable builder describing one API call
//! - [`handle_result`] / [`handle_result_list`]: Normalize transport outcomes
//! - [`retrieve_many`], [`retrieve_next`], [`retrieve_all`]: Cursor pagination
//! - [`create`], [`retrieve_file_upload`]: Non-paginated entry points
//! - [`Schema`] / [`cast`]: Filter outgoing changes per [`Intent`]
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::request::{retrieve_all, Page, Request};
//! use stripe_api::clients::{HttpClient, HttpMethod, RequestOptions};
//!
//! let client = HttpClient::new(&config);
//!
//! let intent: serde_json::Value = Request::default()
//!     .put_method(HttpMethod::Post)
//!     .put_endpoint("payment_intents")
//!     .put_param("amount", 2000)
//!     .put_param("currency", "usd")
//!     .make_request(&client)
//!     .await?;
//!
//! let customers: Page<serde_json::Value> =
//!     retrieve_all(&client, "customers", &RequestOptions::new()).await?;
//! ```

mod changeset;
mod descriptor;
mod errors;
mod executor;
mod page;
mod pagination;
mod result;

#[cfg(test)]
mod test_support;

pub use changeset::{cast, Intent, Schema};
pub use descriptor::{Endpoint, EndpointFn, Request};
pub use errors::RequestError;
pub use executor::{create, retrieve_file_upload};
pub use page::{Page, PaginationParams, StripeObject};
pub use pagination::{retrieve_all, retrieve_many, retrieve_next, MAX_PAGE_SIZE};
pub use result::{handle_result, handle_result_list, materialize};
