//! Configuration types for the resource client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: immutable settings shared by every request a client makes
//! - [`ClientConfigBuilder`]: a builder for constructing [`ClientConfig`] instances
//! - [`BaseUrl`]: a validated resource base URL
//! - [`BearerToken`]: an opaque credential with masked debug output
//!
//! # Example
//!
//! ```rust
//! use rest_resource_client::{BaseUrl, BearerToken, ClientConfig};
//! use std::time::Duration;
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:3000/prices").unwrap())
//!     .bearer_token(BearerToken::new("token").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, BearerToken};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for a resource client.
///
/// A config is fixed once built. Rotating a token means building a new
/// config and a new client from it.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: BaseUrl,
    bearer_token: BearerToken,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    strict_bodies: bool,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the base URL of the resource.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the bearer token.
    #[must_use]
    pub const fn bearer_token(&self) -> &BearerToken {
        &self.bearer_token
    }

    /// Returns the whole-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns whether request bodies are validated before sending.
    #[must_use]
    pub const fn strict_bodies(&self) -> bool {
        self.strict_bodies
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// `base_url` is required. All other fields have defaults:
///
/// - `bearer_token`: empty
/// - `timeout`: `None`
/// - `user_agent_prefix`: `None`
/// - `strict_bodies`: `false`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<BaseUrl>,
    bearer_token: Option<BearerToken>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    strict_bodies: Option<bool>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn bearer_token(mut self, token: BearerToken) -> Self {
        self.bearer_token = Some(token);
        self
    }

    /// Sets a timeout covering connect, write and the full response read.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Rejects request bodies whose naive rendering would not be valid JSON.
    #[must_use]
    pub const fn strict_bodies(mut self, strict: bool) -> Self {
        self.strict_bodies = Some(strict);
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(ClientConfig {
            base_url,
            bearer_token: self.bearer_token.unwrap_or_default(),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
            strict_bodies: self.strict_bodies.unwrap_or(false),
        })
    }
}
