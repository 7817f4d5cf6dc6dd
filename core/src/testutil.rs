//! Scripted in-memory transport for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{ApiError, Result};
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Replays queued responses in order and records every request it sees.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response with the given body.
    pub fn then_body(self, body: &str) -> Self {
        self.then(Ok(HttpResponse::ok(body)))
    }

    /// Queue a bare `{"response_code": code}` body.
    pub fn then_code(self, code: u8) -> Self {
        self.then_body(&format!(r#"{{"response_code":{code}}}"#))
    }

    pub fn then(self, response: Result<HttpResponse>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response left".to_string())))
    }
}

pub fn question_body(questions: &[(&str, &str)]) -> String {
    let results: Vec<serde_json::Value> = questions
        .iter()
        .map(|(question, answer)| {
            serde_json::json!({
                "category": "General Knowledge",
                "type": "boolean",
                "difficulty": "easy",
                "question": question,
                "correct_answer": answer,
                "incorrect_answers": [if *answer == "True" { "False" } else { "True" }],
            })
        })
        .collect();
    serde_json::json!({ "response_code": 0, "results": results }).to_string()
}

pub fn token_body(token: &str) -> String {
    serde_json::json!({
        "response_code": 0,
        "response_message": "Token Generated Successfully!",
        "token": token,
    })
    .to_string()
}
