//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{
    body_json, build_test_app, content_type, get, memory_store, standalone_app, test_config,
    FailingStore,
};
use findify_api::config::HostMode;
use tower::ServiceExt;

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let (app, _pool) = standalone_app().await;
    let response = get(app, "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json; charset=utf-8");

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["backend"], "sqlite");
}

#[tokio::test]
async fn health_check_reports_degraded_storage() {
    let app = build_test_app(test_config(HostMode::Standalone), Arc::new(FailingStore));
    let response = get(app, "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (app, _pool) = standalone_app().await;
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let (app, _pool) = standalone_app().await;
    let response = get(app, "/api/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID, got: {id_str}");
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let (app, _pool) = standalone_app().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/briefs")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("Preflight response must carry access-control-allow-origin");
    assert_eq!(allow_origin, "http://localhost:5173");
}

#[tokio::test]
async fn invalid_cors_origin_is_skipped_without_panicking() {
    let mut config = test_config(HostMode::Standalone);
    config.cors_origins = vec![
        "http://bad\u{1}origin".to_string(),
        "http://localhost:5173".to_string(),
    ];
    let (store, _pool) = memory_store().await;
    let app = build_test_app(config, store);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/briefs")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
}
