//! List results and pagination parameters.
//!
//! A [`Page`] is one batch of a list endpoint, annotated with the `limit` it
//! was fetched with and the endpoint (`url`) it came from, so the next batch
//! can be requested from it alone. [`PaginationParams`] is the transient
//! input of a single page fetch.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::Params;
use crate::request::RequestError;

/// An API object addressable by identifier.
///
/// The identifier of the last item of a page is the cursor for the next one.
pub trait StripeObject {
    /// Returns the object's identifier, if it has one.
    fn id(&self) -> Option<&str>;
}

impl StripeObject for Value {
    fn id(&self) -> Option<&str> {
        self.get("id").and_then(Value::as_str)
    }
}

fn list_object() -> String {
    "list".to_string()
}

/// One fetched batch of list results.
///
/// Item order is the order the API returned and is never changed.
///
/// # Example
///
/// ```rust
/// use stripe_api::request::Page;
/// use serde_json::json;
///
/// let page: Page<serde_json::Value> = serde_json::from_value(json!({
///     "object": "list",
///     "data": [{"id": "cus_1"}, {"id": "cus_2"}],
///     "has_more": true,
///     "url": "/v1/customers"
/// }))
/// .unwrap();
///
/// assert_eq!(page.len(), 2);
/// assert!(page.has_more);
/// assert_eq!(page.last_id(), Some("cus_2"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Object type tag, always `list` for Stripe list objects.
    #[serde(default = "list_object")]
    pub object: String,
    /// Items in API order.
    pub data: Vec<T>,
    /// Whether more items exist beyond this page.
    #[serde(default)]
    pub has_more: bool,
    /// Total number of items, when the endpoint reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    /// Page size this page was fetched with.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Endpoint this page was fetched from.
    #[serde(default)]
    pub url: Option<String>,
}

impl<T> Page<T> {
    /// Creates a page from items and the `has_more` flag.
    #[must_use]
    pub fn new(data: Vec<T>, has_more: bool) -> Self {
        Self {
            object: list_object(),
            data,
            has_more,
            total_count: None,
            limit: None,
            url: None,
        }
    }

    /// Returns the page with `limit` and `url` replaced, other fields intact.
    #[must_use]
    pub fn with_location(self, limit: Option<u32>, url: impl Into<String>) -> Self {
        Self {
            limit,
            url: Some(url.into()),
            ..self
        }
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns an iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

impl<T: StripeObject> Page<T> {
    /// Returns the identifier of the last item, if any.
    #[must_use]
    pub fn last_id(&self) -> Option<&str> {
        self.data.last().and_then(|item| item.id())
    }

    /// Returns the cursor for the page after this one.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::EmptyPage`] if the page has no items and
    /// [`RequestError::MissingCursor`] if its last item has no identifier.
    pub fn next_cursor(&self) -> Result<&str, RequestError> {
        let last = self.data.last().ok_or(RequestError::EmptyPage)?;
        last.id().ok_or(RequestError::MissingCursor)
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Parameters for a single page fetch.
///
/// # Example
///
/// ```rust
/// use stripe_api::request::PaginationParams;
/// use serde_json::json;
///
/// let params = PaginationParams::new()
///     .limit(10)
///     .starting_after("cus_9")
///     .filter("email", "jane@example.com");
///
/// let map = params.to_params();
/// assert_eq!(map.get("limit"), Some(&json!(10)));
/// assert_eq!(map.get("starting_after"), Some(&json!("cus_9")));
/// assert_eq!(map.get("email"), Some(&json!("jane@example.com")));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaginationParams {
    /// Maximum number of items to return.
    pub limit: Option<u32>,
    /// Return items after this identifier (exclusive).
    pub starting_after: Option<String>,
    /// Return items before this identifier (exclusive).
    pub ending_before: Option<String>,
    /// Additional list filters sent alongside the cursor.
    pub filters: Params,
}

impl PaginationParams {
    /// Creates empty pagination parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the forward cursor.
    #[must_use]
    pub fn starting_after(mut self, cursor: impl Into<String>) -> Self {
        self.starting_after = Some(cursor.into());
        self
    }

    /// Sets the backward cursor.
    #[must_use]
    pub fn ending_before(mut self, cursor: impl Into<String>) -> Self {
        self.ending_before = Some(cursor.into());
        self
    }

    /// Adds a list filter.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Flattens into the parameter map sent to the transport.
    ///
    /// Cursor and limit take precedence over filters with the same name.
    #[must_use]
    pub fn to_params(&self) -> Params {
        let mut params = self.filters.clone();
        if let Some(limit) = self.limit {
            params.insert("limit".to_string(), Value::from(limit));
        }
        if let Some(cursor) = &self.starting_after {
            params.insert("starting_after".to_string(), Value::from(cursor.clone()));
        }
        if let Some(cursor) = &self.ending_before {
            params.insert("ending_before".to_string(), Value::from(cursor.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_deserializes_list_object() {
        let page: Page<Value> = serde_json::from_value(json!({
            "object": "list",
            "data": [{"id": "ch_1"}, {"id": "ch_2"}],
            "has_more": false,
            "url": "/v1/charges",
            "total_count": 2
        }))
        .unwrap();

        assert_eq!(page.object, "list");
        assert_eq!(page.len(), 2);
        assert!(!page.has_more);
        assert_eq!(page.total_count, Some(2));
        assert_eq!(page.url.as_deref(), Some("/v1/charges"));
        assert!(page.limit.is_none());
    }

    #[test]
    fn test_page_rejects_payload_without_data() {
        let result: Result<Page<Value>, _> = serde_json::from_value(json!({"object": "customer"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_with_location_keeps_other_fields() {
        let mut page = Page::new(vec![json!({"id": "a"})], true);
        page.total_count = Some(9);

        let page = page.with_location(Some(25), "customers");

        assert_eq!(page.limit, Some(25));
        assert_eq!(page.url.as_deref(), Some("customers"));
        assert!(page.has_more);
        assert_eq!(page.total_count, Some(9));
        assert_eq!(page.data, vec![json!({"id": "a"})]);
    }

    #[test]
    fn test_next_cursor_is_last_item_id() {
        let page = Page::new(
            vec![json!({"id": "x1"}), json!({"id": "x2"}), json!({"id": "x3"})],
            true,
        );
        assert_eq!(page.next_cursor(), Ok("x3"));
    }

    #[test]
    fn test_next_cursor_on_empty_page() {
        let page: Page<Value> = Page::new(vec![], true);
        assert_eq!(page.next_cursor(), Err(RequestError::EmptyPage));
        assert_eq!(page.last_id(), None);
    }

    #[test]
    fn test_next_cursor_when_last_item_has_no_id() {
        let page = Page::new(vec![json!({"id": "x1"}), json!({"object": "card"})], true);
        assert_eq!(page.next_cursor(), Err(RequestError::MissingCursor));
    }

    #[test]
    fn test_page_iterates_in_order() {
        let page = Page::new(vec![1, 2, 3], false);

        let borrowed: Vec<&i32> = (&page).into_iter().collect();
        assert_eq!(borrowed, vec![&1, &2, &3]);

        let owned: Vec<i32> = page.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3]);
    }

    #[test]
    fn test_pagination_params_cursor_overrides_filter() {
        let params = PaginationParams::new()
            .filter("limit", 5)
            .filter("created[gte]", 1_700_000_000)
            .limit(100)
            .ending_before("cus_1");

        let map = params.to_params();

        assert_eq!(map.get("limit"), Some(&json!(100)));
        assert_eq!(map.get("ending_before"), Some(&json!("cus_1")));
        assert_eq!(map.get("created[gte]"), Some(&json!(1_700_000_000)));
        assert!(!map.contains_key("starting_after"));
    }

    #[test]
    fn test_empty_pagination_params() {
        assert!(PaginationParams::new().to_params().is_empty());
    }
}
