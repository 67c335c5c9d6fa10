//! Model Asset References
//!
//! Models as they appear inside collection listings. The full model entity
//! lives behind its own routes; this is the reference shape list responses
//! carry.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::value_objects::image::{self, Image, Thumbnailed};

/// A model asset reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Model name, unique per owner
    pub name: String,
    /// User or organization owning the model
    pub owner: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Times the model has been downloaded
    #[serde(default)]
    pub downloads: u64,
    /// Raw thumbnail references as sent by the server
    #[serde(default)]
    pub thumbnail_urls: Vec<String>,
    /// Resolved thumbnail images
    #[serde(skip)]
    pub thumbnails: Vec<Image>,
}

impl Model {
    /// Whether at least one thumbnail resolved to a valid URL.
    pub fn has_thumbnail(&self) -> bool {
        !self.thumbnails.is_empty()
    }

    /// The first resolved thumbnail, if any.
    pub fn thumbnail(&self) -> Option<&Image> {
        self.thumbnails.first()
    }
}

impl Thumbnailed for Model {
    fn resolve_thumbnails(&mut self, base: &Url) {
        self.thumbnails = image::resolve_all(base, &self.thumbnail_urls);
    }
}
