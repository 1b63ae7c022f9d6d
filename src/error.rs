//! Configuration error types.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that an
//! invalid base URL or token is rejected before any client is built.
//!
//! # Example
//!
//! ```rust
//! use rest_resource_client::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("localhost:3000/prices");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is not an absolute `http` or `https` URL.
    #[error("Invalid base URL '{url}'. Please provide an absolute URL with scheme (e.g., 'http://localhost:3000/prices').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Bearer token contains characters that cannot appear in a header value.
    #[error("Bearer token contains characters that are not allowed in an HTTP header value.")]
    InvalidBearerToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
