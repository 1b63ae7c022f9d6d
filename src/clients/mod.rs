//! HTTP transport layer.
//!
//! This module provides the request executor the resource client is built
//! on. It attaches the fixed JSON and bearer headers, sends exactly one
//! request per call and surfaces statuses of 400 and above as errors.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client bound to one base URL and token
//! - [`HttpRequest`]: a request relative to the base URL
//! - [`HttpResponse`]: a response with its body kept as raw text
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`HttpError`]: transport error taxonomy
//!
//! # No Retries
//!
//! Every failure is returned to the caller as-is. There is no retry,
//! backoff or connection reuse.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, CLIENT_VERSION, JSON_CONTENT_TYPE};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
