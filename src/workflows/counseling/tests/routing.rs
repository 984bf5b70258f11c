use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialize")))
        .expect("request")
}

#[tokio::test]
async fn alignment_endpoint_reports_mismatches() {
    let router = build_router();
    let request = json_request(
        "POST",
        "/api/v1/counseling/alignment",
        json!({
            "proficiency_statement": STRONG_POSITIVE,
            "proficiency_mark": "4.8",
            "conduct_statement": CLEARLY_NEGATIVE,
            "conduct_mark": "4.8",
        }),
    );

    let response = router.oneshot(request).await.expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("status"), Some(&json!("warning")));
    let messages = payload
        .get("messages")
        .and_then(Value::as_array)
        .expect("messages array");
    assert_eq!(messages.len(), 1);
    assert!(messages[0]
        .as_str()
        .unwrap_or_default()
        .starts_with("Conduct: "));
}

#[tokio::test]
async fn alignment_endpoint_tolerates_garbage_marks() {
    let router = build_router();
    let request = json_request(
        "POST",
        "/api/v1/counseling/alignment",
        json!({
            "proficiency_statement": CLEARLY_NEGATIVE,
            "proficiency_mark": "not a number",
            "conduct_statement": "",
            "conduct_mark": "",
        }),
    );

    let response = router.oneshot(request).await.expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("status"), Some(&json!("neutral")));
    assert_eq!(
        payload
            .pointer("/proficiency/category")
            .and_then(Value::as_str),
        Some("insufficient")
    );
}

#[tokio::test]
async fn recommendation_endpoint_returns_a_range() {
    let router = build_router();
    let request = json_request(
        "POST",
        "/api/v1/counseling/recommendation",
        json!({ "statement": "outstanding, exceptional, superior performer" }),
    );

    let response = router.oneshot(request).await.expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("min"), Some(&json!(4.5)));
    assert_eq!(payload.get("max"), Some(&json!(5.0)));
    assert_eq!(payload.get("suggested"), Some(&json!(4.7)));
}

#[tokio::test]
async fn phrases_endpoint_serves_tier_and_mos_lists() {
    let router = build_router();
    let request = json_request(
        "POST",
        "/api/v1/counseling/phrases",
        json!({ "kind": "proficiency", "level": "4.5", "mos": "aviation" }),
    );

    let response = router.oneshot(request).await.expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    let quick = payload
        .get("quick_phrases")
        .and_then(Value::as_array)
        .expect("quick phrases");
    assert_eq!(quick.len(), 5);
    let mos = payload
        .get("mos_phrases")
        .and_then(Value::as_array)
        .expect("mos phrases");
    assert!(!mos.is_empty());
}

#[tokio::test]
async fn templates_endpoint_lists_the_catalog() {
    let router = build_router();
    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/counseling/templates")
        .body(Body::empty())
        .expect("request");

    let response = router.oneshot(request).await.expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    let catalog = payload.as_array().expect("catalog array");
    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog[0].get("suggested_proficiency_mark"),
        Some(&json!("4.3"))
    );
}

#[tokio::test]
async fn draft_routes_cover_the_lifecycle() {
    let router = build_router();

    let save = json_request(
        "POST",
        "/api/v1/counseling/drafts",
        json!({
            "name": "Cpl Doe",
            "form": {
                "proficiency_statement": STRONG_POSITIVE,
                "proficiency_mark": "4.8",
            },
        }),
    );
    let response = router.clone().oneshot(save).await.expect("router dispatch");
    assert_eq!(response.status(), StatusCode::CREATED);
    let saved = read_json_body(response).await;
    let draft_id = saved
        .get("id")
        .and_then(Value::as_str)
        .expect("draft id")
        .to_string();
    assert!(saved.get("created_label").is_some());

    let list = Request::builder()
        .method("GET")
        .uri("/api/v1/counseling/drafts")
        .body(Body::empty())
        .expect("request");
    let response = router.clone().oneshot(list).await.expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);
    let listed = read_json_body(response).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let fetch = Request::builder()
        .method("GET")
        .uri(format!("/api/v1/counseling/drafts/{draft_id}"))
        .body(Body::empty())
        .expect("request");
    let response = router
        .clone()
        .oneshot(fetch)
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = read_json_body(response).await;
    assert_eq!(
        fetched.pointer("/form/proficiency_mark").and_then(Value::as_str),
        Some("4.8")
    );

    let remove = Request::builder()
        .method("DELETE")
        .uri(format!("/api/v1/counseling/drafts/{draft_id}"))
        .body(Body::empty())
        .expect("request");
    let response = router
        .clone()
        .oneshot(remove)
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let missing = Request::builder()
        .method("GET")
        .uri(format!("/api/v1/counseling/drafts/{draft_id}"))
        .body(Body::empty())
        .expect("request");
    let response = router.oneshot(missing).await.expect("router dispatch");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_draft_name_is_unprocessable() {
    let router = build_router();
    let request = json_request(
        "POST",
        "/api/v1/counseling/drafts",
        json!({ "name": "   ", "form": {} }),
    );

    let response = router.oneshot(request).await.expect("router dispatch");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn render_endpoint_returns_html() {
    let router = build_router();
    let request = json_request(
        "POST",
        "/api/v1/counseling/render",
        json!({
            "title": "Cpl Doe",
            "layout": "worksheet",
            "form": {
                "proficiency_statement": STRONG_POSITIVE,
                "proficiency_mark": "4.8",
            },
        }),
    );

    let response = router.oneshot(request).await.expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok()),
        Some("text/html; charset=utf-8")
    );

    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let html = String::from_utf8(body.to_vec()).expect("utf8 body");
    assert!(html.contains("Marine Signature / Date"));
    assert!(html.contains("Cpl Doe"));
}
