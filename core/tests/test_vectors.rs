//! Verify query encoding and response interpretation against JSON test
//! vectors stored in `test-vectors/`.
//!
//! Built requests are decoded back into parameter pairs and compared with the
//! expected list, which checks both the set of emitted keys and their order.

use trivia_core::response::parse_questions;
use trivia_core::{
    query, ApiError, Category, Difficulty, HttpMethod, HttpResponse, ListOptions, QuestionType,
    RandomOptions, RequestBuilder, Token,
};

const BASE_URL: &str = "https://opentdb.com/";

fn builder() -> RequestBuilder {
    RequestBuilder::new(BASE_URL).unwrap()
}

/// Build `ListOptions` from a vector's `input` object.
fn list_options(input: &serde_json::Value) -> ListOptions {
    ListOptions {
        auto_refresh: false,
        category: input["category"]
            .as_u64()
            .map_or(Category::Any, |c| Category::from_code(c as u8)),
        difficulty: match input["difficulty"].as_str() {
            None => Difficulty::Any,
            Some("easy") => Difficulty::Easy,
            Some("medium") => Difficulty::Medium,
            Some("hard") => Difficulty::Hard,
            Some(other) => panic!("unknown difficulty: {other}"),
        },
        kind: match input["type"].as_str() {
            None => QuestionType::Any,
            Some("multiple") => QuestionType::Multiple,
            Some("boolean") => QuestionType::Boolean,
            Some(other) => panic!("unknown type: {other}"),
        },
        token: input["token"].as_str().map(Token::new),
        limit: input["limit"].as_u64().map(|l| l as u32),
    }
}

fn expected_pairs(case: &serde_json::Value) -> Vec<(String, String)> {
    case["expected_query"]
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

/// Decode the query string of `url` back into ordered pairs.
fn decoded_pairs(url: &str) -> Vec<(String, String)> {
    url::Url::parse(url)
        .unwrap()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let b = builder();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let options = list_options(&case["input"]);

        let req = b.question_request(&query::encode_list(&options)).unwrap();
        assert_eq!(req.method, HttpMethod::Get, "{name}: method");
        assert!(req.url.starts_with("https://opentdb.com/api.php?"), "{name}: route");
        assert_eq!(decoded_pairs(&req.url), expected_pairs(case), "{name}: query");
    }
}

// ---------------------------------------------------------------------------
// Random
// ---------------------------------------------------------------------------

#[test]
fn random_test_vectors() {
    let raw = include_str!("../../test-vectors/random.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let b = builder();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let options = RandomOptions::from(list_options(&case["input"]));

        let req = b.question_request(&query::encode_random(&options)).unwrap();
        assert_eq!(decoded_pairs(&req.url), expected_pairs(case), "{name}: query");
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let response = HttpResponse {
            status: case["status"].as_u64().unwrap() as u16,
            body: case["body"].as_str().unwrap().to_string(),
        };
        let result = parse_questions(&response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            let matched = match expected_error.as_str().unwrap() {
                "NoResults" => matches!(err, ApiError::NoResults),
                "InvalidParameter" => matches!(err, ApiError::InvalidParameter),
                "TokenEmpty" => matches!(err, ApiError::TokenEmpty),
                "TokenNotFound" => matches!(err, ApiError::TokenNotFound),
                "UnknownResponseCode" => matches!(err, ApiError::UnknownResponseCode(_)),
                "HttpError" => matches!(err, ApiError::HttpError { .. }),
                "Deserialization" => matches!(err, ApiError::Deserialization(_)),
                "UnexpectedResponse" => matches!(err, ApiError::UnexpectedResponse(_)),
                other => panic!("{name}: unknown expected_error: {other}"),
            };
            assert!(matched, "{name}: got {err:?}");
        } else {
            let questions = result.unwrap();
            let expected = case["expected_count"].as_u64().unwrap() as usize;
            assert_eq!(questions.len(), expected, "{name}: parsed result");
            for q in &questions {
                assert!(!q.incorrect_answers.contains(&q.correct_answer), "{name}: disjoint answers");
            }
        }
    }
}
