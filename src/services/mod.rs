//! Service facades over [`ResourceClient`](crate::rest::ResourceClient).
//!
//! - [`AuthService`]: register, login and manage users under a caller-supplied base URL
//! - [`PriceService`]: list, create, update and delete price records

mod auth;
mod price;

pub use auth::AuthService;
pub use price::{PriceService, DEFAULT_PRICE_BASE_URL};
