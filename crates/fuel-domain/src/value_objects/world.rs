//! World Asset References
//!
//! Worlds as they appear inside collection listings, mirroring the model
//! reference shape.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::value_objects::image::{self, Image, Thumbnailed};

/// A world asset reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// World name, unique per owner
    pub name: String,
    /// User or organization owning the world
    pub owner: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Times the world has been downloaded
    #[serde(default)]
    pub downloads: u64,
    /// Raw thumbnail references as sent by the server
    #[serde(default)]
    pub thumbnail_urls: Vec<String>,
    /// Resolved thumbnail images
    #[serde(skip)]
    pub thumbnails: Vec<Image>,
}

impl World {
    /// Whether at least one thumbnail resolved to a valid URL.
    pub fn has_thumbnail(&self) -> bool {
        !self.thumbnails.is_empty()
    }

    /// The first resolved thumbnail, if any.
    pub fn thumbnail(&self) -> Option<&Image> {
        self.thumbnails.first()
    }
}

impl Thumbnailed for World {
    fn resolve_thumbnails(&mut self, base: &Url) {
        self.thumbnails = image::resolve_all(base, &self.thumbnail_urls);
    }
}
