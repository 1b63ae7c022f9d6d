//! Price record service.

use crate::config::{BaseUrl, BearerToken, ClientConfig};
use crate::rest::{Fields, ResourceClient, ResourceError};

/// Collection URL used when no base URL is configured.
pub const DEFAULT_PRICE_BASE_URL: &str = "http://localhost:3000/prices";

/// Client for the price records backend.
///
/// | method | request |
/// |---|---|
/// | [`get_all_prices`](Self::get_all_prices) | `GET {base}` |
/// | [`create_price`](Self::create_price) | `POST {base}` |
/// | [`update_price`](Self::update_price) | `PUT {base}` |
/// | [`delete_price`](Self::delete_price) | `DELETE {base}/{id}` |
///
/// `update_price` targets the collection URL; the record's id travels
/// inside the body.
#[derive(Debug)]
pub struct PriceService {
    resource: ResourceClient,
}

impl PriceService {
    /// Creates a price service for [`DEFAULT_PRICE_BASE_URL`] with the given
    /// bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if the token is not a valid header value.
    pub fn new(auth_token: &str) -> Result<Self, ResourceError> {
        let config = ClientConfig::builder()
            .base_url(BaseUrl::new(DEFAULT_PRICE_BASE_URL)?)
            .bearer_token(BearerToken::new(auth_token)?)
            .build()?;
        Self::from_config(&config)
    }

    /// Creates a price service from a full configuration.
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

    /// Lists all prices.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get_all_prices(&self) -> Result<String, ResourceError> {
        self.resource.list().await
    }

    /// Creates a price.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create_price(&self, price_data: &Fields) -> Result<String, ResourceError> {
        self.resource.create(price_data).await
    }

    /// Updates a price identified by the id inside `price_data`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update_price(&self, price_data: &Fields) -> Result<String, ResourceError> {
        self.resource.update(None, price_data).await
    }

    /// Deletes a price.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete_price(&self, price_id: &str) -> Result<String, ResourceError> {
        self.resource.delete(price_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_new_uses_default_base_url_and_token() {
        let prices = PriceService::new("price-token").unwrap();

        assert_eq!(prices.resource().base_url(), DEFAULT_PRICE_BASE_URL);
        assert_eq!(
            prices
                .resource()
                .http_client()
                .default_headers()
                .get("Authorization"),
            Some(&"Bearer price-token".to_string())
        );
    }

    #[test]
    fn test_new_rejects_header_breaking_token() {
        let result = PriceService::new("token\nX-Other: 1");
        assert!(matches!(
            result,
            Err(ResourceError::Config(ConfigError::InvalidBearerToken))
        ));
    }
}
