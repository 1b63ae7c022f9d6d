//! Resource-level error types.
//!
//! - [`ResourceError::InvalidPath`]: an id or sub-resource segment is empty
//! - [`ResourceError::InvalidBody`]: strict body validation rejected a field
//! - [`ResourceError::Config`]: the client could not be configured
//! - [`ResourceError::Http`]: wraps transport and status errors
//!
//! # Example
//!
//! ```rust,ignore
//! match prices.delete_price("5").await {
//!     Ok(body) => println!("{body}"),
//!     Err(e) if e.is_transport() => println!("Could not reach server: {e}"),
//!     Err(e) => println!("Server said no ({:?}): {:?}", e.status(), e.response_body()),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A path segment was empty.
    #[error("Invalid resource path: {path}")]
    InvalidPath {
        /// The path as it was requested.
        path: String,
    },

    /// A body field would render as invalid JSON.
    #[error("Invalid request body field '{field}': {reason}")]
    InvalidBody {
        /// The offending field name.
        field: String,
        /// Why the field was rejected.
        reason: &'static str,
    },

    /// Client configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns the HTTP status if the server answered with 400 or above.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(HttpError::Response(e)) => Some(e.code),
            _ => None,
        }
    }

    /// Returns the server's response body for status errors.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::Response(e)) => Some(&e.body),
            _ => None,
        }
    }

    /// Returns `true` if no response status was obtained.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(HttpError::Network(_)))
    }

    /// Returns `true` if the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
