// tests/support/helpers.rs
use super::mocks::{InMemoryArticleRepo, ScriptedGenerator};
use autoblog::application::{
    commands::articles::ArticleCommandService, services::ApplicationServices,
};
use autoblog::domain::article::TopicSelector;
use autoblog::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;

pub fn command_service(
    repo: &Arc<InMemoryArticleRepo>,
    generator: &Arc<ScriptedGenerator>,
) -> Arc<ArticleCommandService> {
    Arc::new(ArticleCommandService::new(
        repo.clone(),
        repo.clone(),
        generator.clone(),
        TopicSelector::default(),
    ))
}

pub fn build_test_state(
    repo: &Arc<InMemoryArticleRepo>,
    generator: &Arc<ScriptedGenerator>,
) -> HttpState {
    let services = Arc::new(ApplicationServices::new(
        repo.clone(),
        repo.clone(),
        generator.clone(),
        TopicSelector::default(),
    ));
    HttpState { services }
}

pub fn make_test_router(
    repo: &Arc<InMemoryArticleRepo>,
    generator: &Arc<ScriptedGenerator>,
) -> axum::Router {
    build_router(
        build_test_state(repo, generator),
        &["http://localhost:3000".to_string()],
    )
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
