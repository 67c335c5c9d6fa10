//! Client Configuration
//!
//! Explicit configuration value injected at construction. The client holds
//! no module-level globals: everything route construction needs - host,
//! API version, optional access token - travels in [`ClientConfig`].

use std::time::Duration;

use url::Url;

use fuel_domain::constants::{DEFAULT_HOST, DEFAULT_TIMEOUT_SECS, DEFAULT_VERSION};
use fuel_domain::{Error, Result};

/// Configuration for a [`CollectionClient`](crate::CollectionClient).
///
/// Fixed at construction; all absolute URLs (routes, resolved thumbnails,
/// next-page cursors) derive from the host and version configured here.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    host: Url,
    base: Url,
    version: String,
    private_token: Option<String>,
    timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_VERSION).expect("default endpoint is a valid base URL")
    }
}

impl ClientConfig {
    /// Create a configuration for the given host and API version.
    ///
    /// The host must be a URL that can carry path segments; the version is
    /// a single path segment appended to it (`{host}/{version}`).
    pub fn new(host: &str, version: &str) -> Result<Self> {
        let host = Url::parse(host)
            .map_err(|e| Error::config(format!("invalid host URL '{host}': {e}")))?;
        if host.cannot_be_a_base() {
            return Err(Error::config(format!(
                "host URL '{host}' cannot carry path segments"
            )));
        }
        let version = version.trim_matches('/').to_string();
        if version.is_empty() {
            return Err(Error::config("API version must not be empty"));
        }

        let mut base = host.clone();
        {
            let mut segments = base
                .path_segments_mut()
                .map_err(|()| Error::config("host URL cannot carry path segments"))?;
            segments.pop_if_empty().push(&version);
        }

        Ok(Self {
            host,
            base,
            version,
            private_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Attach a pre-issued access token, sent as the `Private-Token` header.
    pub fn with_private_token<S: Into<String>>(mut self, token: S) -> Self {
        self.private_token = Some(token.into());
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured host, without the version segment.
    ///
    /// Next-page cursors from the `Link` header resolve against this URL.
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// The versioned base URL (`{host}/{version}`) all routes hang off of.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// The configured API version segment.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The configured access token, if any.
    pub fn private_token(&self) -> Option<&str> {
        self.private_token.as_deref()
    }

    /// The configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
