//! Client entry point.
//!
//! # Design
//! `TriviaClient` owns a `Transport` and a `RequestBuilder` and carries no
//! other state. Question and token services are cheap views that borrow both,
//! so each sub-service receives its dependencies explicitly instead of
//! reaching back into a shared client.

use serde::Deserialize;

use crate::error::Result;
use crate::http::Transport;
use crate::question::QuestionService;
use crate::request::{RequestBuilder, QUESTION_ROUTE, TOKEN_ROUTE};
use crate::token::TokenService;
use crate::types::{ListOptions, Question, RandomOptions, Token};

/// Public Open Trivia DB endpoint.
pub const DEFAULT_BASE_URL: &str = "https://opentdb.com/";

/// Where the service lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub question_route: String,
    pub token_route: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            question_route: QUESTION_ROUTE.to_string(),
            token_route: TOKEN_ROUTE.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }
}

/// Trivia API client over a caller-supplied transport.
#[derive(Debug, Clone)]
pub struct TriviaClient<T> {
    requests: RequestBuilder,
    transport: T,
}

impl<T: Transport> TriviaClient<T> {
    /// Client for the default routes under `base_url`.
    pub fn new(base_url: &str, transport: T) -> Result<Self> {
        Self::with_config(&ClientConfig::with_base_url(base_url), transport)
    }

    pub fn with_config(config: &ClientConfig, transport: T) -> Result<Self> {
        let requests =
            RequestBuilder::with_routes(&config.base_url, &config.question_route, &config.token_route)?;
        Ok(Self { requests, transport })
    }

    pub fn questions(&self) -> QuestionService<'_, T> {
        QuestionService::new(&self.requests, &self.transport)
    }

    pub fn tokens(&self) -> TokenService<'_, T> {
        TokenService::new(&self.requests, &self.transport)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list(&self, options: &mut ListOptions) -> Result<Vec<Question>> {
        self.questions().list(options)
    }

    pub fn random(&self, options: &mut RandomOptions) -> Result<Question> {
        self.questions().random(options)
    }

    pub fn create_token(&self) -> Result<Token> {
        self.tokens().create()
    }

    pub fn refresh_token(&self, token: &Token) -> Result<Token> {
        self.tokens().refresh(token)
    }

    pub fn token_still_valid(&self, token: &Token) -> Result<bool> {
        self.tokens().still_valid(token)
    }
}
