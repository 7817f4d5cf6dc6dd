//! Error types for the trivia API client.
//!
//! # Design
//! The service reports most failures through the `response_code` field of a
//! 200 response, so the service-level variants (`NoResults`,
//! `InvalidParameter`, `TokenNotFound`, `TokenEmpty`) carry no payload. The
//! transport class (`Transport`, `HttpError`, `Deserialization`) keeps the raw
//! detail for debugging and is never retried by this crate.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by the trivia client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection, TLS, I/O).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be decoded into the expected envelope.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The service found no questions matching the options.
    #[error("no results were found for the provided options")]
    NoResults,

    /// The service rejected the option combination.
    #[error("the provided options are not valid")]
    InvalidParameter,

    /// The token is unknown to the service. Obtain a new one with `create`.
    #[error("token not found")]
    TokenNotFound,

    /// Every question in the token's scope has been served; the token must be
    /// refreshed before it is used again.
    #[error("token has returned all possible questions for the query")]
    TokenEmpty,

    /// A route or base URL could not be resolved into a request URL.
    #[error("malformed route: {0}")]
    MalformedRoute(String),

    /// The body carried a response code outside the known set.
    #[error("unknown response code {0}")]
    UnknownResponseCode(i64),

    /// A success envelope was missing its payload.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl ApiError {
    /// True for failures that happened below the service protocol: the
    /// network round trip, a non-2xx status, or an undecodable body.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::Transport(_) | ApiError::HttpError { .. } | ApiError::Deserialization(_)
        )
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Deserialization(e.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(e: url::ParseError) -> Self {
        ApiError::MalformedRoute(e.to_string())
    }
}
