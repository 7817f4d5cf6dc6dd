//! Continuation-token lifecycle.
//!
//! A token starts Active once created, becomes Exhausted when a question
//! request reports `TokenEmpty`, and returns to Active after a refresh. There
//! is no terminal state and no client-side expiry. `TokenNotFound` is fatal
//! for that token value: the caller must `create` a new one.

use tracing::debug;

use crate::error::{ApiError, Result};
use crate::http::Transport;
use crate::query::{self, TokenCommand};
use crate::request::RequestBuilder;
use crate::response;
use crate::types::Token;

/// Token commands against the token route.
pub struct TokenService<'a, T: ?Sized> {
    requests: &'a RequestBuilder,
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> TokenService<'a, T> {
    pub fn new(requests: &'a RequestBuilder, transport: &'a T) -> Self {
        Self { requests, transport }
    }

    /// Ask the service for a brand new token.
    pub fn create(&self) -> Result<Token> {
        let query = query::encode_token_command(TokenCommand::Request, None);
        let request = self.requests.token_request(&query)?;
        debug!(route = request.route(), "requesting token");
        let token = response::parse_token(&self.transport.execute(&request)?)?;
        debug!(token = %token.redacted(), "token issued");
        Ok(token)
    }

    /// Reset `token` so it forgets every question served under it.
    ///
    /// Returns the token to use from now on. When the service does not echo
    /// one back, the original value stays valid and is returned.
    pub fn refresh(&self, token: &Token) -> Result<Token> {
        let query = query::encode_token_command(TokenCommand::Reset, Some(token));
        let request = self.requests.token_request(&query)?;
        debug!(token = %token.redacted(), "resetting token");
        let envelope: response::TokenEnvelope = response::interpret(&self.transport.execute(&request)?)?;
        Ok(envelope
            .token
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| token.clone()))
    }

    /// Whether the service still recognises `token`.
    ///
    /// The service has no validity endpoint, so this asks for one question
    /// under the token. An exhausted token is still a known token. The probe
    /// counts against the token's scope when it succeeds.
    pub fn still_valid(&self, token: &Token) -> Result<bool> {
        let mut query = query::Query::new();
        query.insert("amount", "1".to_string());
        query.insert("token", token.as_str().to_string());
        let request = self.requests.question_request(&query)?;
        debug!(token = %token.redacted(), "probing token");
        match response::parse_questions(&self.transport.execute(&request)?) {
            Ok(_) | Err(ApiError::NoResults) | Err(ApiError::TokenEmpty) => Ok(true),
            Err(ApiError::TokenNotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
