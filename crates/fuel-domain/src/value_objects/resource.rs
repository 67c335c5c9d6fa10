//! Asset Addressing
//!
//! A [`FuelResource`] addresses a model or world by owner, name, and kind.
//! It exists only to build URLs for asset-membership operations and is never
//! persisted by the client.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of an addressable asset, doubling as its route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Model assets, served under `/models`
    Models,
    /// World assets, served under `/worlds`
    Worlds,
}

impl ResourceKind {
    /// Route segment for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Models => "models",
            Self::Worlds => "worlds",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to an addressable asset: owner + name + kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FuelResource {
    /// User or organization owning the asset
    pub owner: String,
    /// Asset name, unique per owner and kind
    pub name: String,
    /// Whether the asset is a model or a world
    pub kind: ResourceKind,
}

impl FuelResource {
    /// Create an asset reference.
    pub fn new<S: Into<String>>(owner: S, name: S, kind: ResourceKind) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            kind,
        }
    }

    /// Create a model reference.
    pub fn model<S: Into<String>>(owner: S, name: S) -> Self {
        Self::new(owner, name, ResourceKind::Models)
    }

    /// Create a world reference.
    pub fn world<S: Into<String>>(owner: S, name: S) -> Self {
        Self::new(owner, name, ResourceKind::Worlds)
    }
}
