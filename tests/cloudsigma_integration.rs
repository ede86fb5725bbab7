//! Integration tests for the CloudSigma binding using wiremock
//!
//! These tests verify list parsing and pagination behavior against mocked
//! endpoints, including that each page fetch is exactly one outbound request.

use crosscloud::auth::BearerAuth;
use crosscloud::cloudsigma::{CloudSigmaClient, PaginationOptions};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{basic_auth, bearer_token, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn endpoint(server: &MockServer) -> String {
    format!("{}/api/2.0", server.uri())
}

/// A single page parses to the same items in the same order
#[tokio::test]
async fn test_list_ips_preserves_response_order() {
    let server = MockServer::start().await;

    let body = json!({
        "objects": [
            {"uuid": "185.12.6.183", "resource_uri": "/api/2.0/ips/185.12.6.183/"},
            {"uuid": "185.12.6.184", "resource_uri": "/api/2.0/ips/185.12.6.184/"},
            {"uuid": "185.12.6.185", "resource_uri": "/api/2.0/ips/185.12.6.185/"}
        ],
        "meta": {"limit": 0, "offset": 0, "total_count": 3}
    });

    Mock::given(method("GET"))
        .and(path("/api/2.0/ips/"))
        .and(basic_auth("user@example.com", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = CloudSigmaClient::new(&endpoint(&server), "user@example.com", "secret")
        .expect("client should build");

    let page = client.list_ips(None).await.expect("list should succeed");

    assert_eq!(page.len(), 3);
    let uuids: Vec<&str> = page.items.iter().map(|ip| ip.uuid.as_str()).collect();
    assert_eq!(uuids, ["185.12.6.183", "185.12.6.184", "185.12.6.185"]);
    assert!(page.next_options().is_none());
}

/// Pagination options become limit/offset query parameters
#[tokio::test]
async fn test_list_ips_sends_marker_as_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/2.0/ips/"))
        .and(query_param("limit", "2"))
        .and(query_param("offset", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [],
            "meta": {"limit": 2, "offset": 4, "total_count": 4}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = CloudSigmaClient::new(&endpoint(&server), "user@example.com", "secret")
        .expect("client should build");

    let options = PaginationOptions::new().limit(2).offset(4);
    let page = client
        .list_ips(Some(&options))
        .await
        .expect("list should succeed");

    assert!(page.is_empty());
}

/// Auto-pagination issues one request per page and keeps page order
#[tokio::test]
async fn test_list_all_ips_follows_continuation() {
    let server = MockServer::start().await;

    // First page: no offset yet
    Mock::given(method("GET"))
        .and(path("/api/2.0/ips/"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [
                {"uuid": "ip-1", "resource_uri": "/api/2.0/ips/ip-1/"},
                {"uuid": "ip-2", "resource_uri": "/api/2.0/ips/ip-2/"}
            ],
            "meta": {"limit": 2, "offset": 0, "total_count": 3}
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Second page: continuation marker derived from the first page's meta
    Mock::given(method("GET"))
        .and(path("/api/2.0/ips/"))
        .and(query_param("offset", "2"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [
                {"uuid": "ip-3", "resource_uri": "/api/2.0/ips/ip-3/"}
            ],
            "meta": {"limit": 2, "offset": 2, "total_count": 3}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = CloudSigmaClient::new(&endpoint(&server), "user@example.com", "secret")
        .expect("client should build");

    let all = client.list_all_ips().await.expect("listing should succeed");

    let uuids: Vec<&str> = all.iter().map(|ip| ip.uuid.as_str()).collect();
    assert_eq!(uuids, ["ip-1", "ip-2", "ip-3"]);
}

/// A custom filter replaces basic auth entirely
#[tokio::test]
async fn test_with_filter_uses_injected_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/2.0/ips/"))
        .and(bearer_token("session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [],
            "meta": {"limit": 0, "offset": 0, "total_count": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = CloudSigmaClient::with_filter(
        &endpoint(&server),
        Arc::new(BearerAuth::new("session-token")),
    )
    .expect("client should build");

    let page = client.list_ips(None).await.expect("list should succeed");
    assert!(page.is_empty());
}

/// Transport failures surface unmodified; no retry happens
#[tokio::test]
async fn test_server_error_is_surfaced_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/2.0/ips/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = CloudSigmaClient::new(&endpoint(&server), "user@example.com", "secret")
        .expect("client should build");

    let error = client.list_ips(None).await.unwrap_err();
    assert!(error.to_string().contains("API request failed"));
}

/// A response that is not a list envelope is a parse error, not a panic
#[tokio::test]
async fn test_non_envelope_response_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/2.0/ips/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "not-a-list"})))
        .mount(&server)
        .await;

    let client = CloudSigmaClient::new(&endpoint(&server), "user@example.com", "secret")
        .expect("client should build");

    let error = client.list_ips(None).await.unwrap_err();
    assert!(error.to_string().contains("paginated list envelope"));
}
