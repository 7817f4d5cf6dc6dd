//! Question retrieval with token auto-refresh.
//!
//! # Design
//! Both operations run encode → build → execute → interpret. When the
//! service reports `TokenEmpty` and the options ask for auto-refresh, the
//! token is reset, written back into the caller's options, and the whole
//! operation runs again. The loop allows `MAX_REFRESH_RETRIES` refreshes per
//! call; a second `TokenEmpty` after that is surfaced. Every other error
//! propagates on first sight.

use tracing::{debug, warn};

use crate::error::{ApiError, Result};
use crate::http::Transport;
use crate::query;
use crate::request::RequestBuilder;
use crate::response;
use crate::token::TokenService;
use crate::types::{ListOptions, Question, RandomOptions, Token};

/// Refresh-triggered retries allowed per logical call.
pub const MAX_REFRESH_RETRIES: usize = 1;

/// Question commands against the question route.
pub struct QuestionService<'a, T: ?Sized> {
    requests: &'a RequestBuilder,
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> QuestionService<'a, T> {
    pub fn new(requests: &'a RequestBuilder, transport: &'a T) -> Self {
        Self { requests, transport }
    }

    /// Fetch up to `options.effective_limit()` questions.
    ///
    /// If the token is refreshed along the way, `options.token` holds the
    /// refreshed value afterwards.
    pub fn list(&self, options: &mut ListOptions) -> Result<Vec<Question>> {
        let mut refreshes = 0;
        loop {
            let request = self.requests.question_request(&query::encode_list(options))?;
            debug!(route = request.route(), "listing questions");
            match response::parse_questions(&self.transport.execute(&request)?) {
                Err(ApiError::TokenEmpty) => {
                    self.refresh_after_empty(options.auto_refresh, &mut options.token, &mut refreshes)?
                }
                outcome => return outcome,
            }
        }
    }

    /// Fetch one random question.
    ///
    /// If the token is refreshed along the way, `options.token` holds the
    /// refreshed value afterwards.
    pub fn random(&self, options: &mut RandomOptions) -> Result<Question> {
        let mut refreshes = 0;
        loop {
            let request = self.requests.question_request(&query::encode_random(options))?;
            debug!(route = request.route(), "fetching random question");
            match response::parse_single_question(&self.transport.execute(&request)?) {
                Err(ApiError::TokenEmpty) => {
                    self.refresh_after_empty(options.auto_refresh, &mut options.token, &mut refreshes)?
                }
                outcome => return outcome,
            }
        }
    }

    /// Refresh `token` in place so the caller can retry, or return
    /// `TokenEmpty` when no retry is allowed.
    fn refresh_after_empty(
        &self,
        auto_refresh: bool,
        token: &mut Option<Token>,
        refreshes: &mut usize,
    ) -> Result<()> {
        if !auto_refresh || *refreshes >= MAX_REFRESH_RETRIES {
            return Err(ApiError::TokenEmpty);
        }
        let Some(current) = token.as_ref().filter(|t| !t.is_empty()) else {
            return Err(ApiError::TokenEmpty);
        };
        warn!(token = %current.redacted(), "token exhausted, refreshing");
        let refreshed = TokenService::new(self.requests, self.transport).refresh(current)?;
        *token = Some(refreshed);
        *refreshes += 1;
        Ok(())
    }
}
