//! Cursor pagination over list endpoints.
//!
//! Pages are fetched strictly in sequence: the cursor for page N+1 is the
//! identifier of the last item of page N, so it cannot be requested before
//! page N has arrived. [`retrieve_all`] walks every page with an explicit
//! accumulator rather than recursion, and any failure along the way aborts
//! the walk without returning partial data.

use serde::de::DeserializeOwned;

use crate::clients::{Headers, HttpMethod, RequestOptions, Transport};
use crate::request::{handle_result_list, Page, PaginationParams, RequestError, StripeObject};

/// Largest page size the API accepts, used by [`retrieve_all`].
pub const MAX_PAGE_SIZE: u32 = 100;

/// Fetches one page of `endpoint` with `pagination` as query parameters.
///
/// The returned page carries `pagination.limit` and `endpoint`, so
/// [`retrieve_next`] can continue from it.
///
/// # Errors
///
/// Returns [`RequestError::Api`] if the transport fails and
/// [`RequestError::Materialize`] if the payload is not a list object.
pub async fn retrieve_many<T, R>(
    transport: &R,
    pagination: &PaginationParams,
    endpoint: &str,
    options: &RequestOptions,
) -> Result<Page<T>, RequestError>
where
    T: DeserializeOwned,
    R: Transport,
{
    let outcome = transport
        .request(
            &pagination.to_params(),
            HttpMethod::Get,
            endpoint,
            &Headers::new(),
            options,
        )
        .await;
    handle_result_list(outcome, pagination, endpoint)
}

/// Fetches the page following `previous`.
///
/// The cursor is the identifier of the last item of `previous`, and the
/// page size and endpoint are taken from `previous` as well.
///
/// # Errors
///
/// Returns [`RequestError::EmptyPage`] if `previous` has no items,
/// [`RequestError::MissingCursor`] if its last item has no identifier and
/// [`RequestError::MissingPageUrl`] if it does not record its endpoint. No
/// request is sent in those cases. Otherwise fails as [`retrieve_many`].
pub async fn retrieve_next<T, R>(
    transport: &R,
    previous: &Page<T>,
    options: &RequestOptions,
) -> Result<Page<T>, RequestError>
where
    T: DeserializeOwned + StripeObject,
    R: Transport,
{
    let cursor = previous.next_cursor()?;
    let endpoint = previous.url.as_deref().ok_or(RequestError::MissingPageUrl)?;

    let mut pagination = PaginationParams::new().starting_after(cursor);
    pagination.limit = previous.limit;

    retrieve_many(transport, &pagination, endpoint, options).await
}

/// Fetches every item of `endpoint`, [`MAX_PAGE_SIZE`] items at a time.
///
/// Returns the last page with its `data` replaced by the items of all
/// pages, in the order they were fetched.
///
/// # Errors
///
/// Returns the first error of any page fetch, see [`retrieve_many`] and
/// [`retrieve_next`]. Items from pages fetched before the failure are
/// discarded.
///
/// # Example
///
/// ```rust,ignore
/// use stripe_api::request::{retrieve_all, Page};
/// use stripe_api::{HttpClient, RequestOptions};
///
/// let customers: Page<serde_json::Value> =
///     retrieve_all(&client, "customers", &RequestOptions::new()).await?;
/// println!("{} customers", customers.len());
/// ```
pub async fn retrieve_all<T, R>(
    transport: &R,
    endpoint: &str,
    options: &RequestOptions,
) -> Result<Page<T>, RequestError>
where
    T: DeserializeOwned + StripeObject,
    R: Transport,
{
    let first = PaginationParams::new().limit(MAX_PAGE_SIZE);
    let mut page: Page<T> = retrieve_many(transport, &first, endpoint, options).await?;
    let mut items = Vec::new();
    let mut fetched = 1_usize;

    while page.has_more {
        tracing::debug!(
            "Fetched page {} of {} ({} items), continuing",
            fetched,
            endpoint,
            page.len()
        );
        let next = retrieve_next(transport, &page, options).await?;
        items.append(&mut page.data);
        page = next;
        fetched += 1;
    }

    tracing::debug!(
        "Fetched {} page(s) of {}, {} items in total",
        fetched,
        endpoint,
        items.len() + page.len()
    );
    items.append(&mut page.data);
    page.data = items;
    Ok(page)
}
