//! HTTP response type.

/// An HTTP response with its body kept as raw text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The full response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, body: String) -> Self {
        Self { code, body }
    }

    /// Returns `true` for any status below 400.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code < 400
    }

    /// Consumes the response, returning its body.
    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }
}
