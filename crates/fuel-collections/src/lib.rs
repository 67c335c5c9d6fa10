//! # Fuel Collections Client
//!
//! Access layer for the Fuel server's collection API: named groupings of
//! model and world assets owned by users and organizations. The client
//! translates high-level operations (list, get, create, edit, delete,
//! asset membership, pagination) into HTTP calls against a versioned base
//! URL and turns responses into typed domain objects or one normalized
//! error.
//!
//! ## Usage
//!
//! ```no_run
//! use fuel_collections::{ClientConfig, CollectionClient};
//!
//! # async fn example() -> fuel_collections::Result<()> {
//! let client = CollectionClient::new(ClientConfig::default())?;
//!
//! let mut page = client.list(Some("robot")).await?;
//! println!("{} collections match", page.total_count);
//! while page.has_next() {
//!     page = client.next_page(&page).await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! List results are cursor-paginated: the server advertises the next page
//! through an RFC 5988 `Link` header and the total result count through
//! `X-Total-Count`. Every failure - transport, non-2xx status, body shape
//! mismatch, pagination misuse - surfaces exactly once as the normalized
//! [`Error`](fuel_domain::Error).

/// Collection API client and request operations
pub mod client;
/// Client configuration
pub mod config;
/// RFC 5988 `Link` response-header parsing
pub mod link;
/// Route construction for the collections API
pub mod routes;

mod response;

// Re-export fuel-domain types commonly used with the client
pub use client::CollectionClient;
pub use config::ClientConfig;
pub use fuel_domain::error::{Error, Result};
pub use fuel_domain::value_objects::{
    Collection, CollectionForm, FuelResource, Image, Model, Page, ResourceKind, World,
};
