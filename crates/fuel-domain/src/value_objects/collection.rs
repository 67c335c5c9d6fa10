//! Collection Entity
//!
//! A collection is a named, owned grouping of model and world resources.
//! Instances are deserialized straight from the server payload; the typed
//! thumbnail list is populated afterwards by resolving the raw references
//! against the versioned base URL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::value_objects::image::{self, Image, Thumbnailed};
use crate::value_objects::{Model, World};

/// A named, owned grouping of model and world resources.
///
/// ## Business Rules
///
/// - `name` is unique per owner; together they address the collection.
/// - `thumbnails` is always initialized (possibly empty), never absent.
/// - `models` and `worlds` stay `None` until fetched through their
///   sub-collection routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection name, unique per owner
    pub name: String,
    /// User or organization owning the collection
    pub owner: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Whether the collection is private to its owner
    #[serde(default)]
    pub private: bool,
    /// Server timestamps
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification timestamp
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Raw thumbnail references as sent by the server
    #[serde(default)]
    pub thumbnail_urls: Vec<String>,
    /// Resolved thumbnail images
    #[serde(skip)]
    pub thumbnails: Vec<Image>,
    /// Models in the collection, absent until fetched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<Model>>,
    /// Worlds in the collection, absent until fetched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worlds: Option<Vec<World>>,
}

impl Collection {
    /// Whether at least one thumbnail resolved to a valid URL.
    pub fn has_thumbnail(&self) -> bool {
        !self.thumbnails.is_empty()
    }

    /// The first resolved thumbnail, if any.
    pub fn thumbnail(&self) -> Option<&Image> {
        self.thumbnails.first()
    }
}

impl Thumbnailed for Collection {
    fn resolve_thumbnails(&mut self, base: &Url) {
        self.thumbnails = image::resolve_all(base, &self.thumbnail_urls);
    }
}

/// Partial-update payload for editing a collection.
///
/// Absent fields are omitted from the form body, leaving the server-side
/// value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionForm {
    /// New description, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New privacy flag, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}
