//! HTTP client for resource requests.
//!
//! This module provides the [`HttpClient`] type, which sends one request per
//! call to a fixed base URL with the bearer token and JSON headers attached.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ClientConfig;

/// Crate version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON media type used for both `Content-Type` and `Accept`.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client bound to one base URL and one bearer token.
///
/// The client handles:
/// - URL construction from the base URL and a relative path
/// - Default headers: `Content-Type`, `Accept`, `Authorization`, `User-Agent`
/// - Mapping statuses of 400 and above to [`HttpResponseError`]
///
/// Idle connections are never kept, so each call opens and closes its own
/// connection. There is no retry logic.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use rest_resource_client::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "42").build()?;
/// let response = client.request(request).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    default_headers: HashMap<String, String>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::ClientInit`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}REST Resource Client v{CLIENT_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());
        default_headers.insert("Accept".to_string(), JSON_CONTENT_TYPE.to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.bearer_token().header_value(),
        );

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .pool_max_idle_per_host(0);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HttpError::ClientInit)?;

        tracing::debug!(
            "Created HTTP client for {} (token set: {})",
            config.base_url(),
            !config.bearer_token().is_empty()
        );

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the absolute URL for a path relative to the base URL.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Sends a single HTTP request and reads the whole response body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - No response could be obtained or read (`Network`)
    /// - The status is 400 or above (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        tracing::debug!("Sending {} request to {}", request.http_method, url);

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let body = res.text().await?;

        tracing::debug!("Received status {} from {}", code, url);

        let response = HttpResponse::new(code, body);
        if response.is_ok() {
            Ok(response)
        } else {
            Err(HttpError::Response(HttpResponseError {
                code,
                body: response.into_body(),
            }))
        }
    }
}
