//! # Fuel Collections - Domain Layer
//!
//! Entities, value objects, and the normalized error type shared by the
//! collections client. This crate is pure: serde shapes and plain data,
//! no I/O and no HTTP.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Collection, Model, World, Image, FuelResource, Page |
//! | [`error`] | Normalized error every client failure converges to |
//! | [`constants`] | Endpoint defaults, header names, filter prefixes |

/// Shared constants for the collections API
pub mod constants;
/// Error handling types
pub mod error;
/// Immutable domain value objects
pub mod value_objects;

pub use error::{Error, Result};
