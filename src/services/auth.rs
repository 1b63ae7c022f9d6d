//! User authentication service.

use crate::config::{BaseUrl, ClientConfig};
use crate::rest::{Fields, ResourceClient, ResourceError};

/// Client for the user authentication backend.
///
/// | method | request |
/// |---|---|
/// | [`register_user`](Self::register_user) | `POST {base}/register` |
/// | [`login_user`](Self::login_user) | `POST {base}/login` |
/// | [`get_user`](Self::get_user) | `GET {base}/{id}` |
/// | [`update_user`](Self::update_user) | `PUT {base}/{id}` |
/// | [`change_password`](Self::change_password) | `PUT {base}/{id}/password` |
/// | [`delete_user`](Self::delete_user) | `DELETE {base}/{id}` |
///
/// # Example
///
/// ```rust,ignore
/// use rest_resource_client::{AuthService, Fields};
///
/// let auth = AuthService::new("http://localhost:3000/users")?;
/// let body = auth
///     .login_user(&Fields::new().with("email", "a@b.c").with("password", "pw"))
///     .await?;
/// ```
#[derive(Debug)]
pub struct AuthService {
    resource: ResourceClient,
}

impl AuthService {
    /// Creates an auth service for `base_url` with an empty bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if `base_url` is invalid.
    pub fn new(base_url: &str) -> Result<Self, ResourceError> {
        let config = ClientConfig::builder()
            .base_url(BaseUrl::new(base_url)?)
            .build()?;
        Self::from_config(&config)
    }

    /// Creates an auth service from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the HTTP client cannot be created.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ResourceError> {
        Ok(Self {
            resource: ResourceClient::new(config)?,
        })
    }

    /// Returns the underlying resource client.
    #[must_use]
    pub const fn resource(&self) -> &ResourceClient {
        &self.resource
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn register_user(&self, user_data: &Fields) -> Result<String, ResourceError> {
        self.resource.create_subresource("register", user_data).await
    }

    /// Logs a user in.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn login_user(&self, login_data: &Fields) -> Result<String, ResourceError> {
        self.resource.create_subresource("login", login_data).await
    }

    /// Fetches a user.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get_user(&self, user_id: &str) -> Result<String, ResourceError> {
        self.resource.get(user_id).await
    }

    /// Updates a user.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update_user(
        &self,
        user_id: &str,
        user_data: &Fields,
    ) -> Result<String, ResourceError> {
        self.resource.update(Some(user_id), user_data).await
    }

    /// Changes a user's password.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn change_password(
        &self,
        user_id: &str,
        password_data: &Fields,
    ) -> Result<String, ResourceError> {
        self.resource
            .update_subresource(user_id, "password", password_data)
            .await
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete_user(&self, user_id: &str) -> Result<String, ResourceError> {
        self.resource.delete(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_new_uses_empty_token() {
        let auth = AuthService::new("http://localhost:3000/users").unwrap();

        assert_eq!(auth.resource().base_url(), "http://localhost:3000/users");
        assert_eq!(
            auth.resource()
                .http_client()
                .default_headers()
                .get("Authorization"),
            Some(&"Bearer ".to_string())
        );
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let result = AuthService::new("users");
        assert!(matches!(
            result,
            Err(ResourceError::Config(ConfigError::InvalidBaseUrl { .. }))
        ));
    }
}
