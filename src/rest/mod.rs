//! Typed REST resource client.
//!
//! This module provides the generic CRUD client both services are built on,
//! together with the request body model it sends.
//!
//! # Overview
//!
//! - [`ResourceClient`]: `list`, `get`, `create`, `update`, `delete` and
//!   sub-resource variants against one base URL
//! - [`Fields`] / [`FieldValue`]: an ordered map of scalar body fields
//! - [`to_json`]: the flat, unescaped JSON rendering sent on the wire
//! - [`build_path`]: joins id and sub-resource segments onto the base URL
//! - [`ResourceError`]: error type for resource operations

mod body;
mod errors;
mod path;
mod resource;

pub use body::{to_json, validate, FieldValue, Fields};
pub use errors::ResourceError;
pub use path::build_path;
pub use resource::ResourceClient;
