//! Response envelopes and response-code interpretation.
//!
//! # Design
//! Every endpoint answers 200 with a JSON envelope whose `response_code`
//! field carries the outcome. Interpretation therefore happens after
//! decoding: first the HTTP status is checked, then the body is decoded,
//! then the code is mapped. `response_code` is decoded as a raw `i64` so any
//! unknown value, including ones outside `u8`, surfaces as
//! `UnknownResponseCode` rather than as a decode failure. Questions whose
//! incorrect answers repeat the correct one are rejected.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ApiError, Result};
use crate::http::HttpResponse;
use crate::types::{Question, Token};

/// Outcome class carried by every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    NoResults,
    InvalidParameter,
    TokenEmpty,
    TokenNotFound,
}

impl TryFrom<i64> for ResponseCode {
    type Error = ApiError;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            0 => Ok(ResponseCode::Success),
            1 => Ok(ResponseCode::NoResults),
            2 => Ok(ResponseCode::InvalidParameter),
            3 => Ok(ResponseCode::TokenEmpty),
            4 => Ok(ResponseCode::TokenNotFound),
            other => Err(ApiError::UnknownResponseCode(other)),
        }
    }
}

impl From<ResponseCode> for i64 {
    fn from(code: ResponseCode) -> Self {
        match code {
            ResponseCode::Success => 0,
            ResponseCode::NoResults => 1,
            ResponseCode::InvalidParameter => 2,
            ResponseCode::TokenEmpty => 3,
            ResponseCode::TokenNotFound => 4,
        }
    }
}

/// Body of the question route.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionEnvelope {
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<Question>,
}

/// Body of the token route.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenEnvelope {
    pub response_code: i64,
    #[serde(default)]
    pub response_message: Option<String>,
    #[serde(default)]
    pub token: Option<Token>,
}

/// Envelopes that carry a response code next to their payload.
pub trait Envelope {
    fn response_code(&self) -> i64;
}

impl Envelope for QuestionEnvelope {
    fn response_code(&self) -> i64 {
        self.response_code
    }
}

impl Envelope for TokenEnvelope {
    fn response_code(&self) -> i64 {
        self.response_code
    }
}

/// Map a response code onto `Ok(())` or the matching error.
///
/// `TokenEmpty` is returned as an error here; deciding whether to refresh
/// and retry belongs to the retrieval layer.
pub fn check_code(code: i64) -> Result<()> {
    match ResponseCode::try_from(code)? {
        ResponseCode::Success => Ok(()),
        ResponseCode::NoResults => Err(ApiError::NoResults),
        ResponseCode::InvalidParameter => Err(ApiError::InvalidParameter),
        ResponseCode::TokenEmpty => Err(ApiError::TokenEmpty),
        ResponseCode::TokenNotFound => Err(ApiError::TokenNotFound),
    }
}

/// Decode `response` into an envelope without interpreting its code.
pub fn decode<E: DeserializeOwned>(response: &HttpResponse) -> Result<E> {
    if !response.is_success() {
        return Err(ApiError::HttpError {
            status: response.status,
            body: response.body.clone(),
        });
    }
    Ok(serde_json::from_str(&response.body)?)
}

/// Decode and interpret in one step; returns the envelope on success.
pub fn interpret<E: DeserializeOwned + Envelope>(response: &HttpResponse) -> Result<E> {
    let envelope: E = decode(response)?;
    check_code(envelope.response_code())?;
    Ok(envelope)
}

pub fn parse_questions(response: &HttpResponse) -> Result<Vec<Question>> {
    let questions = interpret::<QuestionEnvelope>(response)?.results;
    if let Some(q) = questions
        .iter()
        .find(|q| q.incorrect_answers.contains(&q.correct_answer))
    {
        return Err(ApiError::UnexpectedResponse(format!(
            "correct answer listed as incorrect: {}",
            q.question
        )));
    }
    Ok(questions)
}

pub fn parse_single_question(response: &HttpResponse) -> Result<Question> {
    parse_questions(response)?
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::UnexpectedResponse("success without a question".to_string()))
}

pub fn parse_token(response: &HttpResponse) -> Result<Token> {
    let envelope = interpret::<TokenEnvelope>(response)?;
    envelope.token.filter(|t| !t.is_empty()).ok_or_else(|| {
        ApiError::UnexpectedResponse(format!(
            "success without a token: {}",
            envelope.response_message.as_deref().unwrap_or("no message")
        ))
    })
}
