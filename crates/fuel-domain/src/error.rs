//! Error handling types
//!
//! Every failure surfaced by the collections client converges to the single
//! [`Error`] type below: one terminal error value per call, never a partial
//! success. Callers branch on [`Error::code`] or match variants directly;
//! the `Display` message is for people, not for parsing.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Machine-usable code for failures that carry no HTTP status.
pub const CODE_NO_STATUS: i32 = -1;

/// Normalized error for the collections client
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure: the request never produced a status
    #[error("network error: {message}")]
    Network {
        /// Description of the transport failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Server answered with a non-success status
    #[error("server error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server
        status: u16,
        /// Message taken from the response body, or the status reason
        message: String,
    },

    /// Response body did not match the expected entity shape
    #[error("decode error: {message}")]
    Decode {
        /// Description of the shape mismatch
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid client configuration
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Pagination misuse, e.g. continuing past the last page
    #[error("pagination error: {message}")]
    Pagination {
        /// Description of the pagination error
        message: String,
    },
}

impl Error {
    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an API error from a status code and message
    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
            source: None,
        }
    }

    /// Create a decode error with source
    pub fn decode_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a pagination error
    pub fn pagination<S: Into<String>>(message: S) -> Self {
        Self::Pagination {
            message: message.into(),
        }
    }

    /// Machine-usable error code.
    ///
    /// HTTP failures expose their status; failures without a status
    /// (transport, decode, configuration, pagination misuse) expose
    /// [`CODE_NO_STATUS`].
    pub fn code(&self) -> i32 {
        match self {
            Self::Api { status, .. } => i32::from(*status),
            _ => CODE_NO_STATUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_expose_their_status() {
        let err = Error::api(404, "collection not found");
        assert_eq!(err.code(), 404);
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("collection not found"));
    }

    #[test]
    fn statusless_errors_share_the_reserved_code() {
        assert_eq!(Error::network("unreachable").code(), CODE_NO_STATUS);
        assert_eq!(Error::decode("bad shape").code(), CODE_NO_STATUS);
        assert_eq!(Error::pagination("no cursor").code(), CODE_NO_STATUS);
        assert_eq!(Error::config("bad host").code(), CODE_NO_STATUS);
    }

    #[test]
    fn sources_are_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::network_with_source("request could not be completed", io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
