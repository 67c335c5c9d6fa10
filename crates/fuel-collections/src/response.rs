//! Response Transforms
//!
//! Everything between a raw HTTP response and a typed result: status
//! checking, error normalization, and page assembly. Raw failures are
//! logged here before they are converted, so diagnostics survive the
//! normalization.

use reqwest::Response;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use tracing::{error, warn};
use url::Url;

use fuel_domain::constants::{LINK_HEADER, REL_NEXT, TOTAL_COUNT_HEADER};
use fuel_domain::value_objects::{Page, Thumbnailed};
use fuel_domain::{Error, Result};

use crate::link;

/// Normalize a transport failure (the request never produced a status).
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    error!(error = %err, "request failed before a response was received");
    if err.is_timeout() {
        Error::network_with_source("request timed out", err)
    } else {
        Error::network_with_source("request could not be completed", err)
    }
}

/// Check the response status, normalizing non-2xx into [`Error::Api`].
pub(crate) async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body
    };
    error!(status = status.as_u16(), %message, "server rejected the request");
    Err(Error::api(status.as_u16(), message))
}

/// Deserialize the body of a checked response into a single entity.
pub(crate) async fn entity<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check(response).await?;
    decode(response).await
}

/// Assemble one page of a list response.
///
/// Derives the three page fields: the total count from `X-Total-Count`,
/// the items from the JSON body, and the next-page cursor from the `Link`
/// header's `next` relation resolved against the host. Each item then
/// resolves its thumbnail references against the versioned base URL.
pub(crate) async fn page<T>(host: &Url, base: &Url, response: Response) -> Result<Page<T>>
where
    T: DeserializeOwned + Thumbnailed,
{
    let response = check(response).await?;
    let total_count = total_count(response.headers());
    let next_page = next_page(host, response.headers());

    let mut items: Vec<T> = decode(response).await?;
    for item in &mut items {
        item.resolve_thumbnails(base);
    }

    Ok(Page {
        total_count,
        items,
        next_page,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response.json().await.map_err(|e| {
        error!(error = %e, "response body did not match the expected shape");
        Error::decode_with_source("response body did not match the expected shape", e)
    })
}

/// Total result count across all pages.
///
/// A missing header means an unpaginated response and counts as zero. A
/// header that does not parse as a non-negative integer is also counted as
/// zero, with a diagnostic: a page must never carry an invalid count.
fn total_count(headers: &HeaderMap) -> u64 {
    let Some(value) = headers.get(TOTAL_COUNT_HEADER) else {
        return 0;
    };
    match value.to_str().ok().and_then(|v| v.trim().parse::<u64>().ok()) {
        Some(count) => count,
        None => {
            warn!(header = TOTAL_COUNT_HEADER, ?value, "ignoring unparseable total count");
            0
        }
    }
}

/// The next-page cursor: the `Link` header's `next` relation resolved to an
/// absolute URL against the host. Absent header, absent relation, or an
/// unresolvable target all mean the terminal page.
fn next_page(host: &Url, headers: &HeaderMap) -> Option<Url> {
    let header = headers.get(LINK_HEADER)?.to_str().ok()?;
    let target = link::parse(header).remove(REL_NEXT)?;
    match host.join(&target) {
        Ok(url) => Some(url),
        Err(err) => {
            warn!(%target, error = %err, "ignoring unresolvable next-page link");
            None
        }
    }
}
