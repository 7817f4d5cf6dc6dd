use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, QuestionResponse, TokenResponse};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- questions ---

#[tokio::test]
async fn questions_returns_requested_amount() {
    let resp = app().oneshot(get("/api.php?amount=5")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: QuestionResponse = body_json(resp).await;
    assert_eq!(body.response_code, 0);
    assert_eq!(body.results.len(), 5);
}

#[tokio::test]
async fn questions_filter_by_category_and_difficulty() {
    let resp = app()
        .oneshot(get("/api.php?amount=1&category=15&difficulty=hard"))
        .await
        .unwrap();

    let body: QuestionResponse = body_json(resp).await;
    assert_eq!(body.response_code, 0);
    assert_eq!(body.results[0].category, "Entertainment: Video Games");
    assert_eq!(body.results[0].difficulty, "hard");
}

#[tokio::test]
async fn questions_filter_by_type() {
    let resp = app().oneshot(get("/api.php?amount=3&type=boolean")).await.unwrap();

    let body: QuestionResponse = body_json(resp).await;
    assert_eq!(body.response_code, 0);
    assert!(body.results.iter().all(|q| q.kind == "boolean"));
}

#[tokio::test]
async fn missing_amount_is_invalid_parameter() {
    let resp = app().oneshot(get("/api.php")).await.unwrap();

    let body: QuestionResponse = body_json(resp).await;
    assert_eq!(body.response_code, 2);
    assert!(body.results.is_empty());
}

#[tokio::test]
async fn unknown_difficulty_is_invalid_parameter() {
    let resp = app()
        .oneshot(get("/api.php?amount=1&difficulty=jasldjalkdkalsd"))
        .await
        .unwrap();

    let body: QuestionResponse = body_json(resp).await;
    assert_eq!(body.response_code, 2);
}

#[tokio::test]
async fn empty_category_is_no_results() {
    let resp = app().oneshot(get("/api.php?amount=1&category=1")).await.unwrap();

    let body: QuestionResponse = body_json(resp).await;
    assert_eq!(body.response_code, 1);
}

#[tokio::test]
async fn unknown_token_is_not_found() {
    let resp = app()
        .oneshot(get("/api.php?amount=1&token=not_a_token"))
        .await
        .unwrap();

    let body: QuestionResponse = body_json(resp).await;
    assert_eq!(body.response_code, 4);
}

// --- tokens ---

#[tokio::test]
async fn token_request_issues_token() {
    let resp = app().oneshot(get("/api_token.php?command=request")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: TokenResponse = body_json(resp).await;
    assert_eq!(body.response_code, 0);
    assert_eq!(body.token.unwrap().len(), 32);
}

#[tokio::test]
async fn reset_unknown_token_is_not_found() {
    let resp = app()
        .oneshot(get("/api_token.php?command=reset&token=ghost"))
        .await
        .unwrap();

    let body: TokenResponse = body_json(resp).await;
    assert_eq!(body.response_code, 4);
    assert!(body.token.is_none());
}

#[tokio::test]
async fn unknown_command_is_invalid_parameter() {
    let resp = app().oneshot(get("/api_token.php?command=destroy")).await.unwrap();

    let body: TokenResponse = body_json(resp).await;
    assert_eq!(body.response_code, 2);
}

// --- full token lifecycle ---

#[tokio::test]
async fn token_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // issue
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/api_token.php?command=request"))
        .await
        .unwrap();
    let issued: TokenResponse = body_json(resp).await;
    let token = issued.token.unwrap();

    // Computers has three questions: two, then one more, drains the token.
    let uri = format!("/api.php?amount=2&category=18&token={token}");
    let resp = ServiceExt::ready(&mut app).await.unwrap().call(get(&uri)).await.unwrap();
    let first: QuestionResponse = body_json(resp).await;
    assert_eq!(first.response_code, 0);
    assert_eq!(first.results.len(), 2);

    // only one unseen question left — token is empty for two
    let resp = ServiceExt::ready(&mut app).await.unwrap().call(get(&uri)).await.unwrap();
    let empty: QuestionResponse = body_json(resp).await;
    assert_eq!(empty.response_code, 3);

    // the remaining one is still served and differs from the first two
    let uri_one = format!("/api.php?amount=1&category=18&token={token}");
    let resp = ServiceExt::ready(&mut app).await.unwrap().call(get(&uri_one)).await.unwrap();
    let last: QuestionResponse = body_json(resp).await;
    assert_eq!(last.response_code, 0);
    assert!(!first.results.contains(&last.results[0]));

    // reset
    let reset_uri = format!("/api_token.php?command=reset&token={token}");
    let resp = ServiceExt::ready(&mut app).await.unwrap().call(get(&reset_uri)).await.unwrap();
    let reset: TokenResponse = body_json(resp).await;
    assert_eq!(reset.response_code, 0);
    assert_eq!(reset.token.as_deref(), Some(token.as_str()));

    // the full category is available again
    let uri_all = format!("/api.php?amount=3&category=18&token={token}");
    let resp = ServiceExt::ready(&mut app).await.unwrap().call(get(&uri_all)).await.unwrap();
    let again: QuestionResponse = body_json(resp).await;
    assert_eq!(again.response_code, 0);
    assert_eq!(again.results.len(), 3);
}
