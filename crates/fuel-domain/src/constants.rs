//! Shared Constants
//!
//! Constants used across the collections client: endpoint defaults,
//! the response headers the pagination engine consumes, and the search
//! filter prefix understood by the server's list routes.

/// Public production Fuel server.
pub const DEFAULT_HOST: &str = "https://fuel.gazebosim.org";

/// API version segment used to build every route.
pub const DEFAULT_VERSION: &str = "1.0";

/// Response header carrying the total number of results across all pages.
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Response header carrying RFC 5988 pagination relations.
pub const LINK_HEADER: &str = "Link";

/// Link relation naming the next page of a list result.
pub const REL_NEXT: &str = "next";

/// Request header carrying a pre-issued access token.
pub const PRIVATE_TOKEN_HEADER: &str = "Private-Token";

/// Filter prefix selecting name/owner full-text search on list routes.
pub const SEARCH_FILTER_PREFIX: &str = ":noft:";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
