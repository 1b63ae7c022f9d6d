//! Resource path building.
//!
//! Paths are relative to a client's base URL and made of segments such as
//! a resource id or a sub-resource name:
//!
//! - `[]` targets the collection itself (`{base}`)
//! - `["42"]` targets one resource (`{base}/42`)
//! - `["42", "password"]` targets a sub-resource (`{base}/42/password`)
//!
//! Segments are inserted as given; they are not percent-encoded.
//!
//! # Example
//!
//! ```rust
//! use rest_resource_client::rest::build_path;
//!
//! assert_eq!(build_path(&[]).unwrap(), "");
//! assert_eq!(build_path(&["42", "/password"]).unwrap(), "42/password");
//! assert!(build_path(&["42", ""]).is_err());
//! ```

use crate::rest::errors::ResourceError;

/// Joins path segments with `/`.
///
/// Leading and trailing `/` characters are stripped from every segment.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidPath`] if any segment is empty after
/// stripping.
pub fn build_path(segments: &[&str]) -> Result<String, ResourceError> {
    let mut path = String::new();
    for segment in segments {
        let trimmed = segment.trim_matches('/');
        if trimmed.is_empty() {
            return Err(ResourceError::InvalidPath {
                path: segments.join("/"),
            });
        }
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(trimmed);
    }
    Ok(path)
}
