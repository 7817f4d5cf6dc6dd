//! HTTP transport types and the `Transport` seam.
//!
//! # Design
//! Requests and responses are plain data. `RequestBuilder` produces
//! `HttpRequest` values and the response interpreter consumes `HttpResponse`
//! values; neither touches the network. The round trip itself goes through a
//! `Transport`, which callers can implement with any HTTP library and which
//! owns every connection, TLS and timeout concern.

use crate::error::Result;

/// HTTP method for a request. The trivia service is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `url` is fully qualified with its percent-encoded query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// The URL without its query string. Safe to log, since the query may
    /// carry a session token.
    pub fn route(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// A 200 response with a body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes an `HttpRequest` and returns the raw response.
///
/// Implementations should return non-2xx responses as data rather than as
/// `Err`, and reserve `Err(ApiError::Transport)` for failures that produced no
/// response at all. They must be safe to share between threads.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        (**self).execute(request)
    }
}
