//! HTTP request types.
//!
//! This module provides the [`HttpRequest`] type and its builder.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the resource client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for methods that carry a request body.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request relative to a client's base URL.
///
/// # Example
///
/// ```rust
/// use rest_resource_client::clients::{HttpMethod, HttpRequest};
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "42").build().unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "")
///     .body(r#"{"name":"Widget"}"#)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the base URL; empty targets the base URL itself.
    pub path: String,
    /// The serialized JSON body, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    /// - `http_method` is `Get` or `Delete` but `body` is `Some`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.http_method.has_body(), self.body.is_some()) {
            (true, false) => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            }),
            (false, true) => Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<String>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
        }
    }

    /// Sets the serialized request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}
