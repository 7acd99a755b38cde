//! Router tests driven through `tower::ServiceExt::oneshot`.


use crate::adoption::adapters::memory::InMemoryAdoptionRepository;
use crate::config::AppConfig;
use crate::http::{AppState, Backends, router};
use crate::media::adapters::memory::InMemoryImageStore;
use crate::post::adapters::memory::InMemoryPostRepository;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

const MAX_IMAGE_BYTES: usize = 16;

/// Builds a router over empty in-memory backends.
pub(super) fn app() -> Router {
    let mut config = AppConfig::from_lookup(|_| None).expect("default config");
    config.public_url = "https://amigofiel.test".to_owned();
    config.max_image_bytes = MAX_IMAGE_BYTES;
    config.report_threshold = 2;
    let backends = Backends {
        posts: Arc::new(InMemoryPostRepository::new()),
        adoptions: Arc::new(InMemoryAdoptionRepository::new()),
        images: Arc::new(InMemoryImageStore::new(config.public_url.clone())),
    };
    router(AppState::new(backends, &config).expect("state builds"))
}

/// Sends `request` and returns the status with the body parsed as JSON
/// (`Value::Null` when the body is not JSON).
pub(super) async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub(super) fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("valid request")
}

pub(super) fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub(super) fn post_with_token(uri: &str, token: Option<&str>) -> Request<Body> {
    let builder = Request::post(uri);
    let with_header = match token {
        Some(value) => builder.header("x-edit-token", value),
        None => builder,
    };
    with_header.body(Body::empty()).expect("valid request")
}

pub(super) fn text(value: &Value, pointer: &str) -> String {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("{pointer} missing in {value}"))
        .to_owned()
}

#[tokio::test(flavor = "multi_thread")]
async fn health_answers_ok() {
    let response = app()
        .oneshot(get("/health"))
        .await
        .expect("router is infallible");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");
    assert_eq!(bytes.as_ref(), b"ok");
}

#[tokio::test(flavor = "multi_thread")]
async fn preflight_allows_the_edit_token_header() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/posts")
        .header(header::ORIGIN, "https://example.org")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-edit-token")
        .body(Body::empty())
        .expect("valid request");

    let response = app()
        .oneshot(request)
        .await
        .expect("router is infallible");

    assert_eq!(response.status(), StatusCode::OK);
    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();
    assert!(allowed.contains("x-edit-token"));
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}
