//! Integration test for the history passthrough route.

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use socialpilot_upload::UploadClient;
use socialpilot_web::{AppState, create_router};

#[tokio::test]
async fn history_route_passes_through_upstream_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uploadposts/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [{"id": "abc123"}]
        })))
        .mount(&server)
        .await;

    let state = Arc::new(AppState {
        upload: UploadClient::new("key", "user").with_base_url(server.uri()),
    });
    let response = create_router(state)
        .oneshot(
            Request::builder()
                .uri("/history")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload["posts"][0]["id"], "abc123");
}

#[tokio::test]
async fn history_route_maps_upstream_failure_to_bad_gateway() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let state = Arc::new(AppState {
        upload: UploadClient::new("key", "user").with_base_url(server.uri()),
    });
    let response = create_router(state)
        .oneshot(
            Request::builder()
                .uri("/history")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(payload["error"].as_str().unwrap().contains("500"));
}
