//! Health probe tests
//!
//! Run with: cargo test -p integration-tests --test health_tests

use integration_tests::{assert_json, assert_status, test_config, MockUpstream, TestServer};
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_health_check() {
    let upstream = MockUpstream::start().await.unwrap();
    let server = TestServer::start(test_config(&upstream.base_url(), &[]).unwrap())
        .await
        .unwrap();

    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let upstream = MockUpstream::start().await.unwrap();
    let server = TestServer::start(test_config(&upstream.base_url(), &[]).unwrap())
        .await
        .unwrap();

    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["store"], "memory");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let upstream = MockUpstream::start().await.unwrap();
    let server = TestServer::start(test_config(&upstream.base_url(), &[]).unwrap())
        .await
        .unwrap();

    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
    assert_status(response, StatusCode::OK).await.unwrap();
}
