//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around the base URL and bearer
//! token. Invalid values are rejected on construction with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated base URL for a REST resource.
///
/// The URL must carry an `http` or `https` scheme and a non-empty host.
/// Trailing `/` characters are trimmed so that joining path segments never
/// produces an empty segment.
///
/// # Example
///
/// ```rust
/// use rest_resource_client::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:3000/prices/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:3000/prices");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        // IPv6 literals keep their brackets, and their colons are not a port.
        let host_len = if remainder.starts_with('[') {
            remainder.find(']').ok_or_else(invalid)? + 1
        } else {
            remainder.find([':', '/', '?', '#']).unwrap_or(remainder.len())
        };
        let host_end = host_start + host_len;

        if host_start >= host_end {
            return Err(invalid());
        }

        // Query strings and fragments would break segment joining.
        if remainder.contains(['?', '#']) || url.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "http").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// An opaque bearer token sent in the `Authorization` header.
///
/// The empty token is valid and yields an unauthenticated `Bearer ` header.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `BearerToken(*****)`.
///
/// # Example
///
/// ```rust
/// use rest_resource_client::BearerToken;
///
/// let token = BearerToken::new("secret-token").unwrap();
/// assert_eq!(format!("{:?}", token), "BearerToken(*****)");
/// assert_eq!(token.header_value(), "Bearer secret-token");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Creates a new bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBearerToken`] if the token contains
    /// control characters, which cannot appear in a header value.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.chars().any(char::is_control) {
            return Err(ConfigError::InvalidBearerToken);
        }
        Ok(Self(token))
    }

    /// Returns an empty (unauthenticated) token.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Returns `true` if no token is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the full `Authorization` header value.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(*****)")
    }
}
