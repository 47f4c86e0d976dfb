use crate::{app, app_with_state, state::AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use cjk_core::ServiceConfig;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(router: axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn small_limit_app(limit: usize) -> axum::Router {
    app_with_state(AppState::new(ServiceConfig { max_input_bytes: limit, ..Default::default() }))
}

// ========== Health ==========

#[tokio::test]
async fn test_health() {
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime_secs"].is_u64());
}

#[tokio::test]
async fn test_unknown_route_404() {
    let req = Request::builder().uri("/nope").body(Body::empty()).unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ========== Format ==========

#[tokio::test]
async fn test_format_default_config() {
    let (status, body) = send(app(), post_json("/api/v1/format", json!({ "text": "中文English混合" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "中文 English 混合");
    assert_eq!(body["changed"], true);
    let rules: Vec<&str> = body["rules_applied"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(rules.contains(&"cjkEnglishSpacing"));
}

#[tokio::test]
async fn test_format_unchanged() {
    let (status, body) = send(app(), post_json("/api/v1/format", json!({ "text": "plain text" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "plain text");
    assert_eq!(body["changed"], false);
}

#[tokio::test]
async fn test_format_with_config_override() {
    let req = post_json(
        "/api/v1/format",
        json!({ "text": "中文English混合", "config": { "cjkEnglishSpacing": false } }),
    );
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "中文English混合");
}

#[tokio::test]
async fn test_format_lenient_config() {
    let req = post_json(
        "/api/v1/format",
        json!({ "text": "中文English混合", "config": { "cjkEnglishSpacing": "yes", "bogus": 1 } }),
    );
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "中文 English 混合");
}

#[tokio::test]
async fn test_format_missing_text_rejected() {
    let resp = app().oneshot(post_json("/api/v1/format", json!({ "config": {} }))).await.unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn test_format_oversized_413() {
    let req = post_json("/api/v1/format", json!({ "text": "中文".repeat(10) }));
    let (status, body) = send(small_limit_app(16), req).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"]["code"], "payload_too_large");
}

// ========== Count ==========

#[tokio::test]
async fn test_count_default_mode() {
    let req = post_json("/api/v1/count", json!({ "text": "This is **bold** 中文 text." }));
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cjk"], 2);
    assert_eq!(body["english"], 4);
    assert_eq!(body["total"], 6);
    assert_eq!(body["chars"], 17);
    assert_eq!(body["display"], "Words: 6");
}

#[tokio::test]
async fn test_count_detailed_mode() {
    let req = post_json("/api/v1/count", json!({ "text": "一二 three", "mode": "Detailed" }));
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display"], "CJK: 2 | EN: 1 | Total: 3");
}

#[tokio::test]
async fn test_count_invalid_mode_400() {
    let req = post_json("/api/v1/count", json!({ "text": "hi", "mode": "verbose" }));
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn test_count_oversized_413() {
    let req = post_json("/api/v1/count", json!({ "text": "word ".repeat(100) }));
    let (status, body) = send(small_limit_app(64), req).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"]["message"].as_str().unwrap().contains("64"));
}

#[tokio::test]
async fn test_count_at_limit_accepted() {
    let req = post_json("/api/v1/count", json!({ "text": "abcd" }));
    let (status, body) = send(small_limit_app(4), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["english"], 1);
}

// ========== Errors ==========

#[test]
fn test_error_mapping() {
    use crate::error::ApiError;
    use cjk_core::CjkError;

    let e = ApiError::from(CjkError::InputTooLarge { len: 10, limit: 5 });
    assert_eq!(e.status, StatusCode::PAYLOAD_TOO_LARGE);
    let e = ApiError::from(CjkError::InvalidMode("x".into()));
    assert_eq!(e.status, StatusCode::BAD_REQUEST);
    let e = ApiError::from(CjkError::Other(anyhow::anyhow!("boom")));
    assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(e.code, "internal_error");
}
