//! Generic CRUD client for one REST resource.
//!
//! [`ResourceClient`] owns an [`HttpClient`] bound to a resource's base URL
//! and exposes the handful of request shapes the services need. Every
//! operation renders its body with [`to_json`], sends exactly one request and
//! returns the response body as text.

use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::config::ClientConfig;
use crate::rest::body::{to_json, validate, Fields};
use crate::rest::errors::ResourceError;
use crate::rest::path::build_path;

/// CRUD client for one REST resource.
///
/// | operation | request |
/// |---|---|
/// | [`list`](Self::list) | `GET {base}` |
/// | [`get`](Self::get) | `GET {base}/{id}` |
/// | [`create`](Self::create) | `POST {base}` |
/// | [`create_subresource`](Self::create_subresource) | `POST {base}/{subpath}` |
/// | [`update`](Self::update) | `PUT {base}/{id}` or `PUT {base}` |
/// | [`update_subresource`](Self::update_subresource) | `PUT {base}/{id}/{subpath}` |
/// | [`delete`](Self::delete) | `DELETE {base}/{id}` |
///
/// # Thread Safety
///
/// `ResourceClient` is `Send + Sync` and immutable; share it by reference or
/// `Arc` and call it from as many tasks as needed.
///
/// # Example
///
/// ```rust,ignore
/// use rest_resource_client::{BaseUrl, ClientConfig};
/// use rest_resource_client::rest::{Fields, ResourceClient};
///
/// let config = ClientConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:3000/prices")?)
///     .build()?;
/// let client = ResourceClient::new(&config)?;
///
/// let body = client
///     .create(&Fields::new().with("name", "Widget").with("price", 9.99))
///     .await?;
/// ```
#[derive(Debug)]
pub struct ResourceClient {
    http_client: HttpClient,
    strict_bodies: bool,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceClient>();
};

impl ResourceClient {
    /// Creates a new resource client.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, ResourceError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
            strict_bodies: config.strict_bodies(),
        })
    }

    /// Returns the base URL of the resource.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Lists the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for transport and status errors.
    pub async fn list(&self) -> Result<String, ResourceError> {
        self.make_request(HttpMethod::Get, &[], None).await
    }

    /// Fetches one resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPath`] if `id` is empty.
    /// Returns [`ResourceError::Http`] for transport and status errors.
    pub async fn get(&self, id: &str) -> Result<String, ResourceError> {
        self.make_request(HttpMethod::Get, &[id], None).await
    }

    /// Creates a resource in the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidBody`] if strict bodies are enabled and
    /// a field would render as invalid JSON.
    /// Returns [`ResourceError::Http`] for transport and status errors.
    pub async fn create(&self, fields: &Fields) -> Result<String, ResourceError> {
        self.make_request(HttpMethod::Post, &[], Some(fields)).await
    }

    /// Posts to a named sub-resource of the collection, e.g. `register`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPath`] if `subpath` is empty.
    /// Returns [`ResourceError::InvalidBody`] if strict bodies are enabled and
    /// a field would render as invalid JSON.
    /// Returns [`ResourceError::Http`] for transport and status errors.
    pub async fn create_subresource(
        &self,
        subpath: &str,
        fields: &Fields,
    ) -> Result<String, ResourceError> {
        self.make_request(HttpMethod::Post, &[subpath], Some(fields)).await
    }

    /// Updates a resource.
    ///
    /// With an id the request targets `{base}/{id}`. Without one it targets
    /// the collection itself and the backend is expected to find the id in
    /// the body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPath`] if `id` is `Some("")`.
    /// Returns [`ResourceError::InvalidBody`] if strict bodies are enabled and
    /// a field would render as invalid JSON.
    /// Returns [`ResourceError::Http`] for transport and status errors.
    pub async fn update(&self, id: Option<&str>, fields: &Fields) -> Result<String, ResourceError> {
        let segments: Vec<&str> = id.into_iter().collect();
        self.make_request(HttpMethod::Put, &segments, Some(fields)).await
    }

    /// Updates a named sub-resource of one resource, e.g. `password`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPath`] if `id` or `subpath` is empty.
    /// Returns [`ResourceError::InvalidBody`] if strict bodies are enabled and
    /// a field would render as invalid JSON.
    /// Returns [`ResourceError::Http`] for transport and status errors.
    pub async fn update_subresource(
        &self,
        id: &str,
        subpath: &str,
        fields: &Fields,
    ) -> Result<String, ResourceError> {
        self.make_request(HttpMethod::Put, &[id, subpath], Some(fields)).await
    }

    /// Deletes one resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPath`] if `id` is empty.
    /// Returns [`ResourceError::Http`] for transport and status errors.
    pub async fn delete(&self, id: &str) -> Result<String, ResourceError> {
        self.make_request(HttpMethod::Delete, &[id], None).await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        segments: &[&str],
        fields: Option<&Fields>,
    ) -> Result<String, ResourceError> {
        let path = build_path(segments)?;

        let mut builder = HttpRequest::builder(method, path);
        if let Some(fields) = fields {
            if self.strict_bodies {
                validate(fields).map_err(|e| {
                    tracing::debug!("Rejected {} request body: {}", method, e);
                    e
                })?;
            }
            builder = builder.body(to_json(fields));
        }

        let request = builder.build().map_err(|e| ResourceError::Http(e.into()))?;
        let response = self.http_client.request(request).await?;
        Ok(response.into_body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, BearerToken};

    fn create_test_client(strict: bool) -> ResourceClient {
        let config = ClientConfig::builder()
            .base_url(BaseUrl::new("http://127.0.0.1:9/users").unwrap())
            .bearer_token(BearerToken::new("token").unwrap())
            .strict_bodies(strict)
            .build()
            .unwrap();
        ResourceClient::new(&config).unwrap()
    }

    #[test]
    fn test_resource_client_keeps_base_url() {
        let client = create_test_client(false);
        assert_eq!(client.base_url(), "http://127.0.0.1:9/users");
        assert_eq!(client.http_client().base_url(), "http://127.0.0.1:9/users");
    }

    #[test]
    fn test_resource_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResourceClient>();
    }

    #[tokio::test]
    async fn test_empty_id_is_rejected_before_sending() {
        let client = create_test_client(false);

        assert!(matches!(
            client.get("").await,
            Err(ResourceError::InvalidPath { .. })
        ));
        assert!(matches!(
            client.delete("/").await,
            Err(ResourceError::InvalidPath { .. })
        ));
        assert!(matches!(
            client.update(Some(""), &Fields::new()).await,
            Err(ResourceError::InvalidPath { .. })
        ));
    }

    #[tokio::test]
    async fn test_strict_bodies_reject_before_sending() {
        let client = create_test_client(true);
        let fields = Fields::new().with("password", "with \"quotes\"");

        let result = client.update_subresource("7", "password", &fields).await;
        assert!(matches!(
            result,
            Err(ResourceError::InvalidBody { ref field, .. }) if field == "password"
        ));
    }
}
