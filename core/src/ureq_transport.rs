//! HTTP transport over a blocking ureq agent.
//!
//! Compiled only with the `ureq-transport` feature, which is on by default.

use std::time::Duration;

use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

/// Blocking `Transport` backed by a ureq agent.
///
/// Non-2xx statuses come back as `HttpResponse` values so the response
/// interpreter sees them; only failures without a response become
/// `ApiError::Transport`.
///
/// ```ignore
/// use trivia_core::{ListOptions, TriviaClient, UreqTransport};
///
/// let client = TriviaClient::new("https://opentdb.com/", UreqTransport::new())?;
/// let questions = client.list(&mut ListOptions::default())?;
/// ```
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Agent with a 30 second overall timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            HttpMethod::Get => self.agent.get(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder
            .call()
            .map_err(|e| ApiError::Transport(format!("{} {}: {e}", request.method.as_str(), request.url)))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(format!("reading body from {}: {e}", request.url)))?;

        Ok(HttpResponse { status, body })
    }
}
