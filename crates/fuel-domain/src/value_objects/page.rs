//! Paginated List Results
//!
//! One page of a list response together with the metadata the server sends
//! alongside it: the total result count and the cursor for the next page.

use url::Url;

/// One page of a paginated list result.
///
/// `next_page` is the pagination cursor: the absolute URL of the next page,
/// or `None` on the terminal page. The client trusts the server's cursor to
/// terminate; no cycle detection is performed here.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Total number of results across all pages, from the count header
    pub total_count: u64,
    /// Items on this page, in server order
    pub items: Vec<T>,
    /// Absolute URL of the next page, or `None` on the last page
    pub next_page: Option<Url>,
}

impl<T> Page<T> {
    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }
}
