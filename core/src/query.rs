//! Options to query-parameter encoding.
//!
//! Only non-default fields are emitted. Keys are kept in a `BTreeMap`, so the
//! encoded query is always ordered by parameter name.

use std::collections::BTreeMap;

use crate::types::{Category, Difficulty, ListOptions, QuestionType, RandomOptions, Token};

/// Ordered parameter name → value mapping.
pub type Query = BTreeMap<&'static str, String>;

/// Token-management commands understood by the token route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCommand {
    Request,
    Reset,
}

impl TokenCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenCommand::Request => "request",
            TokenCommand::Reset => "reset",
        }
    }
}

pub fn encode_list(options: &ListOptions) -> Query {
    let mut query = encode_filters(
        options.category,
        options.difficulty,
        options.kind,
        options.token.as_ref(),
    );
    query.insert("amount", options.effective_limit().to_string());
    query
}

/// Random retrieval always asks for exactly one question.
pub fn encode_random(options: &RandomOptions) -> Query {
    let mut query = encode_filters(
        options.category,
        options.difficulty,
        options.kind,
        options.token.as_ref(),
    );
    query.insert("amount", "1".to_string());
    query
}

pub fn encode_token_command(command: TokenCommand, token: Option<&Token>) -> Query {
    let mut query = Query::new();
    query.insert("command", command.as_str().to_string());
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        query.insert("token", token.as_str().to_string());
    }
    query
}

fn encode_filters(
    category: Category,
    difficulty: Difficulty,
    kind: QuestionType,
    token: Option<&Token>,
) -> Query {
    let mut query = Query::new();
    if !category.is_any() {
        query.insert("category", category.code().to_string());
    }
    if let Some(difficulty) = difficulty.as_param() {
        query.insert("difficulty", difficulty.to_string());
    }
    if let Some(kind) = kind.as_param() {
        query.insert("type", kind.to_string());
    }
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        query.insert("token", token.as_str().to_string());
    }
    query
}
