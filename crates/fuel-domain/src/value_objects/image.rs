//! Thumbnail Images
//!
//! The server references thumbnails by URLs relative to its versioned base
//! (`/{owner}/collections/{name}/thumbnails/0.png` and the like). Entities
//! keep the raw references around and expose resolved absolute URLs as
//! [`Image`] values.

use serde::{Deserialize, Serialize};
use url::Url;

/// A resolved, absolute thumbnail URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Absolute URL of the image
    pub url: Url,
}

impl Image {
    /// Resolve a server-provided thumbnail reference against the versioned
    /// base URL.
    ///
    /// References are appended to the base (`{host}/{version}{reference}`)
    /// rather than RFC 3986-joined: an absolute-path reference must keep the
    /// version prefix, which a join would drop. Already-absolute references
    /// are taken as-is. Returns `None` when the result is not a valid URL.
    pub fn from_reference(base: &Url, reference: &str) -> Option<Self> {
        if reference.contains("://") {
            return Url::parse(reference).ok().map(|url| Self { url });
        }
        let base = base.as_str().trim_end_matches('/');
        let reference = reference.trim_start_matches('/');
        Url::parse(&format!("{base}/{reference}"))
            .ok()
            .map(|url| Self { url })
    }
}

/// Entities whose server payload carries relative thumbnail references.
///
/// Implementations populate their typed [`Image`] list from the raw
/// references; unresolvable entries are dropped, so the image list is always
/// present (possibly empty) and "has thumbnail" is always well-defined.
pub trait Thumbnailed {
    /// Resolve the raw thumbnail references against the versioned base URL.
    fn resolve_thumbnails(&mut self, base: &Url);
}

/// Resolve a list of raw references, dropping entries that do not form a
/// valid URL.
pub(crate) fn resolve_all(base: &Url, references: &[String]) -> Vec<Image> {
    references
        .iter()
        .filter_map(|reference| Image::from_reference(base, reference))
        .collect()
}
