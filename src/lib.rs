//! # REST Resource Client
//!
//! A small typed client for REST-style CRUD backends, with ready-made
//! facades for a user authentication service and a price records service.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated [`BaseUrl`] and masked [`BearerToken`] newtypes
//! - A generic [`ResourceClient`] with `list`, `get`, `create`, `update`,
//!   `delete` and sub-resource operations
//! - Flat request bodies ([`Fields`]) rendered exactly as the backends expect
//! - [`AuthService`] and [`PriceService`] facades
//!
//! Every operation sends one request with `Content-Type: application/json`,
//! `Accept: application/json` and `Authorization: Bearer <token>`, and
//! returns the response body as text. Statuses of 400 and above become
//! errors carrying the status and body.
//!
//! ## Quick Start
//!
//! ```rust
//! use rest_resource_client::{BaseUrl, BearerToken, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:3000/prices").unwrap())
//!     .bearer_token(BearerToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Services
//!
//! ```rust,ignore
//! use rest_resource_client::{AuthService, Fields, PriceService};
//!
//! let auth = AuthService::new("http://localhost:3000/users")?;
//! let user = auth.get_user("42").await?;
//!
//! let prices = PriceService::new("token")?;
//! prices
//!     .create_price(&Fields::new().with("name", "Widget").with("price", 9.99))
//!     .await?;
//! ```
//!
//! ## Errors
//!
//! ```rust,ignore
//! match prices.delete_price("5").await {
//!     Ok(body) => println!("{body}"),
//!     Err(e) if e.is_transport() => println!("Could not reach server: {e}"),
//!     Err(e) => println!("Rejected with {:?}", e.status()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Immutable clients**: base URL and token are fixed at construction
//! - **One request per call**: no retries, no connection reuse
//! - **Async**: operations are `async fn`s driven by the caller's runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod services;

pub use config::{BaseUrl, BearerToken, ClientConfig, ClientConfigBuilder};
pub use error::ConfigError;

pub use clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpResponseError};

pub use rest::{FieldValue, Fields, ResourceClient, ResourceError};

pub use services::{AuthService, PriceService, DEFAULT_PRICE_BASE_URL};
