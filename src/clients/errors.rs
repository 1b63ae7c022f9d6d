//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: the server answered with a status of 400 or above
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error type for everything the transport can report
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_resource_client::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("Server said no: {} {}", e.code, e.body),
//!     Err(HttpError::Network(e)) => println!("Could not reach server: {e}"),
//!     Err(other) => println!("{other}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the server responds with a status of 400 or above.
///
/// Carries the numeric status and the full response body exactly as sent
/// by the server.
///
/// # Example
///
/// ```rust
/// use rest_resource_client::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     body: r#"{"error":"not found"}"#.to_string(),
/// };
///
/// assert_eq!(error.to_string(), r#"HTTP Error 404: {"error":"not found"}"#);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP Error {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body text.
    pub body: String,
}

/// Error returned when an HTTP request fails validation.
///
/// Only POST and PUT carry a body; GET and DELETE never do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not take a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// `Response` means the server was reached and refused the request;
/// `Network` means no status was obtained at all (DNS, refused connection,
/// reset, timeout).
#[derive(Debug, Error)]
pub enum HttpError {
    /// A response with status 400 or above.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, connection or timeout error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),
}

impl HttpError {
    /// Returns `true` if the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}
