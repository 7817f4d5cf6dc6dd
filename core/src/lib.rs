//! Client library for the Open Trivia DB question service.
//!
//! # Overview
//! Options are encoded into query parameters, resolved into a GET request
//! against a configured base URL, executed by a caller-supplied `Transport`,
//! and the `response_code` carried in every JSON body is mapped onto a typed
//! `ApiError`.
//!
//! # Design
//! - `TriviaClient` holds only a `RequestBuilder` and a transport; question
//!   and token services borrow both.
//! - Request construction and response interpretation are pure functions over
//!   plain `HttpRequest` / `HttpResponse` data, so they can be driven without
//!   a network.
//! - Continuation tokens are caller-owned. With `auto_refresh` set, an
//!   exhausted token is reset and the call retried once.
//! - `UreqTransport` (feature `ureq-transport`, on by default) is a ready-made
//!   blocking transport.

pub mod client;
pub mod error;
pub mod http;
pub mod query;
pub mod question;
pub mod request;
pub mod response;
pub mod token;
pub mod types;
#[cfg(feature = "ureq-transport")]
mod ureq_transport;

#[cfg(test)]
mod testutil;

pub use client::{ClientConfig, TriviaClient, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use query::{Query, TokenCommand};
pub use question::QuestionService;
pub use request::RequestBuilder;
pub use response::ResponseCode;
pub use token::TokenService;
pub use types::{Category, Difficulty, ListOptions, Question, QuestionType, RandomOptions, Token};
#[cfg(feature = "ureq-transport")]
pub use ureq_transport::UreqTransport;
