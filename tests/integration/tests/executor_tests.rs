//! Authenticated call tests
//!
//! Token refresh on 401, retry semantics, argument validation, and the
//! tool endpoints' HTTP contract.
//!
//! Run with: cargo test -p integration-tests --test executor_tests

use hrms_service::dto::ToolResult;
use integration_tests::{
    assert_json, error_code, session, test_config, MockUpstream, Scripted, TestServer,
};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

const REFRESH: &str = "/api/auth/token/refresh/";

async fn setup() -> (MockUpstream, TestServer) {
    let upstream = MockUpstream::start().await.unwrap();
    let config = test_config(&upstream.base_url(), &[]).unwrap();
    let server = TestServer::start(config).await.unwrap();
    (upstream, server)
}

// ============================================================================
// Refresh Tests
// ============================================================================

#[tokio::test]
async fn test_refresh_then_retry() {
    let (upstream, server) = setup().await;
    server
        .seed_session(&session("default", "A1", Some("R1")))
        .await
        .unwrap();
    upstream.accept_only(&["A2"]);

    let result = server
        .call_tool("list_attendance", json!({"search": "ana"}))
        .await
        .unwrap();
    assert!(matches!(result, ToolResult::Success { status: Some(200), .. }));

    assert_eq!(
        upstream.data_authorizations(),
        vec![Some("Bearer A1".to_string()), Some("Bearer A2".to_string())]
    );
    let refreshes = upstream.requests_to(REFRESH);
    assert_eq!(refreshes.len(), 1);
    assert_eq!(refreshes[0].body, Some(json!({"refresh": "R1"})));

    // Refresh token kept when upstream does not rotate it
    let stored = server.session("default").await.unwrap().unwrap();
    assert_eq!(stored.token_set.access_token, "A2");
    assert_eq!(stored.token_set.refresh_token.as_deref(), Some("R1"));
}

#[tokio::test]
async fn test_refresh_rotation_is_stored() {
    let (upstream, server) = setup().await;
    server
        .seed_session(&session("default", "A1", Some("R1")))
        .await
        .unwrap();
    upstream.accept_only(&["A2"]);
    upstream.set_refresh(Scripted::json(200, json!({"access": "A2", "refresh": "R2"})));

    let result = server.call_tool("get_today_attendance", json!({})).await.unwrap();
    assert!(result.is_success());

    let stored = server.session("default").await.unwrap().unwrap();
    assert_eq!(stored.token_set.access_token, "A2");
    assert_eq!(stored.token_set.refresh_token.as_deref(), Some("R2"));
}

#[tokio::test]
async fn test_refresh_failure_leaves_session_untouched() {
    let (upstream, server) = setup().await;
    server
        .seed_session(&session("default", "A1", Some("R1")))
        .await
        .unwrap();
    upstream.accept_only(&[]);
    upstream.set_refresh(Scripted::json(401, json!({"detail": "Token is blacklisted"})));

    let result = server.call_tool("list_holidays", json!({})).await.unwrap();
    assert_eq!(error_code(&result), Some("SESSION_EXPIRED"));

    // No retry after a failed refresh
    assert_eq!(upstream.data_authorizations().len(), 1);
    let stored = server.session("default").await.unwrap().unwrap();
    assert_eq!(stored.token_set.access_token, "A1");
    assert_eq!(stored.token_set.refresh_token.as_deref(), Some("R1"));
}

#[tokio::test]
async fn test_no_refresh_token_means_expired() {
    let (upstream, server) = setup().await;
    server
        .seed_session(&session("default", "A1", None))
        .await
        .unwrap();
    upstream.accept_only(&[]);

    let result = server.call_tool("list_holidays", json!({})).await.unwrap();
    match result {
        ToolResult::Error { code, hint, .. } => {
            assert_eq!(code, "SESSION_EXPIRED");
            assert!(hint.unwrap().contains("get_connection_link"));
        }
        other => panic!("expected error, got {other:?}"),
    }
    assert!(upstream.requests_to(REFRESH).is_empty());
}

#[tokio::test]
async fn test_refresh_timeout_counts_as_refresh_failure() {
    let upstream = MockUpstream::start().await.unwrap();
    let config = test_config(&upstream.base_url(), &[("UPSTREAM_TIMEOUT_SECONDS", "1")]).unwrap();
    let server = TestServer::start(config).await.unwrap();
    server
        .seed_session(&session("default", "A1", Some("R1")))
        .await
        .unwrap();
    upstream.accept_only(&[]);
    upstream.set_refresh(
        Scripted::json(200, json!({"access": "A2"})).with_delay(Duration::from_secs(3)),
    );

    let result = server.call_tool("list_holidays", json!({})).await.unwrap();
    assert_eq!(error_code(&result), Some("SESSION_EXPIRED"));

    assert_eq!(upstream.requests_to(REFRESH).len(), 1);
    assert_eq!(upstream.data_authorizations().len(), 1);
    let stored = server.session("default").await.unwrap().unwrap();
    assert_eq!(stored.token_set.access_token, "A1");
    assert_eq!(stored.token_set.refresh_token.as_deref(), Some("R1"));
}

#[tokio::test]
async fn test_second_unauthorized_is_passed_through() {
    let (upstream, server) = setup().await;
    server
        .seed_session(&session("default", "A1", Some("R1")))
        .await
        .unwrap();
    upstream.accept_only(&[]);

    let result = server.call_tool("list_holidays", json!({})).await.unwrap();
    assert!(matches!(result, ToolResult::Success { status: Some(401), .. }));

    // Exactly one refresh and one retry
    assert_eq!(upstream.requests_to(REFRESH).len(), 1);
    assert_eq!(upstream.data_authorizations().len(), 2);
}

// ============================================================================
// Request Shape Tests
// ============================================================================

#[tokio::test]
async fn test_monthly_attendance_query_string() {
    let (upstream, server) = setup().await;
    server
        .seed_session(&session("default", "A1", Some("R1")))
        .await
        .unwrap();

    let result = server
        .call_tool(
            "get_monthly_attendance",
            json!({"month": 2, "year": 2026, "ordering": "", "userid": 9}),
        )
        .await
        .unwrap();
    assert!(result.is_success());

    let requests = upstream.requests_to("/api/attendance/monthly/");
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].query.as_deref(),
        Some("month=2&year=2026&page=1&userid=9")
    );
}

#[tokio::test]
async fn test_create_attendance_posts_body() {
    let (upstream, server) = setup().await;
    server
        .seed_session(&session("default", "A1", Some("R1")))
        .await
        .unwrap();

    let result = server
        .call_tool(
            "create_attendance",
            json!({
                "employee": 7,
                "date": "2026-02-17",
                "in_time": "2026-02-17T09:30:00Z",
                "orignal_total_time": 480,
                "is_working_from_home": true
            }),
        )
        .await
        .unwrap();
    assert!(matches!(result, ToolResult::Success { status: Some(201), .. }));

    let posts = upstream.requests_to("/api/attendance/");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].method, Method::POST);
    assert_eq!(
        posts[0].body,
        Some(json!({
            "employee": 7,
            "date": "2026-02-17",
            "in_time": "2026-02-17T09:30:00Z",
            "orignal_total_time": 480,
            "is_working_from_home": true
        }))
    );
}

#[tokio::test]
async fn test_upstream_body_is_verbatim() {
    let (_upstream, server) = setup().await;
    server
        .seed_session(&session("default", "A1", Some("R1")))
        .await
        .unwrap();

    let result = server
        .call_tool("get_user_salary_info", json!({"month": 5}))
        .await
        .unwrap();
    let body: Value = serde_json::from_str(result.content()).unwrap();
    assert_eq!(body["path"], "/api/payroll/user-salary-info/");
    assert_eq!(body["query"], "month=5");
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
async fn test_month_out_of_range_never_reaches_upstream() {
    let (upstream, server) = setup().await;
    server
        .seed_session(&session("default", "A1", Some("R1")))
        .await
        .unwrap();

    for month in [0, 13] {
        let result = server
            .call_tool("get_monthly_attendance", json!({"month": month, "year": 2024}))
            .await
            .unwrap();
        assert_eq!(error_code(&result), Some("VALIDATION_ERROR"));
        assert!(result.content().contains("'month' must be between 1 and 12."));
    }

    let result = server
        .call_tool("get_user_salary_info", json!({"month": 13}))
        .await
        .unwrap();
    assert_eq!(error_code(&result), Some("VALIDATION_ERROR"));

    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn test_unreachable_upstream_is_reported() {
    // Bind and drop a listener to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = test_config(&format!("http://127.0.0.1:{port}"), &[]).unwrap();
    let server = TestServer::start(config).await.unwrap();
    server
        .seed_session(&session("default", "A1", Some("R1")))
        .await
        .unwrap();

    let result = server.call_tool("get_today_attendance", json!({})).await.unwrap();
    match result {
        ToolResult::Error { code, .. } => assert_eq!(code, "UPSTREAM_UNREACHABLE"),
        other => panic!("expected error, got {other:?}"),
    }

    // Nothing was refreshed or replaced
    let stored = server.session("default").await.unwrap().unwrap();
    assert_eq!(stored.token_set.access_token, "A1");
}

#[tokio::test]
async fn test_not_connected() {
    let (upstream, server) = setup().await;

    let result = server.call_tool("get_today_attendance", json!({})).await.unwrap();
    assert_eq!(error_code(&result), Some("NOT_CONNECTED"));
    assert!(upstream.requests().is_empty());
}

// ============================================================================
// HTTP Contract Tests
// ============================================================================

#[tokio::test]
async fn test_list_tools() {
    let (_upstream, server) = setup().await;

    let body: Value = assert_json(server.get("/tools").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    let tools = body["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 9);
    assert_eq!(tools[0]["name"], "get_connection_link");
    assert!(tools
        .iter()
        .all(|t| t["parameters"]["type"] == "object"));
}

#[tokio::test]
async fn test_unknown_tool() {
    let (_upstream, server) = setup().await;

    let response = server.invoke("drop_tables", &json!({})).await.unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"]["code"], "UNKNOWN_TOOL");
}

#[tokio::test]
async fn test_malformed_body() {
    let (_upstream, server) = setup().await;

    let response = server
        .client
        .post(format!("{}/tools/list_holidays", server.base_url()))
        .body("{year")
        .send()
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_BODY");
}

#[tokio::test]
async fn test_empty_body_means_no_arguments() {
    let (_upstream, server) = setup().await;

    let response = server
        .client
        .post(format!("{}/tools/get_connection_link", server.base_url()))
        .send()
        .await
        .unwrap();
    let result: ToolResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(result.is_success());
}

#[tokio::test]
async fn test_per_caller_sessions_are_isolated() {
    let upstream = MockUpstream::start().await.unwrap();
    let config = test_config(&upstream.base_url(), &[("SESSION_MODE", "per_caller")]).unwrap();
    let server = TestServer::start(config).await.unwrap();

    // Missing header is rejected before any work
    let response = server.invoke("list_holidays", &json!({})).await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    server
        .seed_session(&session("alice", "A1", Some("R1")))
        .await
        .unwrap();

    let response = server
        .invoke_as("alice", "list_holidays", &json!({}))
        .await
        .unwrap();
    let result: ToolResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(result.is_success());

    let response = server
        .invoke_as("bob", "list_holidays", &json!({}))
        .await
        .unwrap();
    let result: ToolResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(error_code(&result), Some("NOT_CONNECTED"));
}
