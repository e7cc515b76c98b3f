mod common;

use axum::http::{Method, StatusCode};
use caseworker_login::prelude::*;

#[tokio::test]
async fn test_posts_exact_json_body_once() {
    let portal = common::spawn_portal(StatusCode::OK, r#"{"id":42,"name":"Alice"}"#).await;
    let transport = HttpLoginTransport::new(&portal.base_url, "/cw-login").unwrap();

    let response = transport
        .post_login(&LoginRequest::new("alice", "secret"))
        .await
        .unwrap();

    assert_eq!(response.name().as_deref(), Some("Alice"));

    let requests = portal.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "/cw-login");
    assert_eq!(
        requests[0].content_type.as_deref(),
        Some("application/json")
    );
    assert_eq!(
        requests[0].body,
        r#"{"username":"alice","password":"secret"}"#
    );
}

#[tokio::test]
async fn test_error_status_body_is_still_parsed() {
    let portal = common::spawn_portal(
        StatusCode::UNAUTHORIZED,
        r#"{"message":"bad credentials"}"#,
    )
    .await;
    let transport = HttpLoginTransport::new(&portal.base_url, "/cw-login").unwrap();

    let response = transport
        .post_login(&LoginRequest::new("alice", "wrong"))
        .await
        .unwrap();

    assert_eq!(response.message().as_deref(), Some("bad credentials"));
    assert!(response.id.is_none());
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let portal = common::spawn_portal(StatusCode::OK, "Invalid Credentials").await;
    let transport = HttpLoginTransport::new(&portal.base_url, "/cw-login").unwrap();

    let err = transport
        .post_login(&LoginRequest::new("alice", "secret"))
        .await
        .unwrap_err();

    assert!(matches!(err, LoginError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_portal_is_transport_error() {
    let base_url = common::closed_portal_url().await;
    let transport = HttpLoginTransport::new(&base_url, "/cw-login").unwrap();

    let err = transport
        .post_login(&LoginRequest::new("alice", "secret"))
        .await
        .unwrap_err();

    assert!(matches!(err, LoginError::Transport(_)));
}

#[tokio::test]
async fn test_custom_endpoint_path() {
    let portal = common::spawn_portal(StatusCode::OK, r#"{"status":"error","message":"x"}"#).await;
    let transport = HttpLoginTransport::new(&portal.base_url, "/api/v2/cw-login").unwrap();

    transport
        .post_login(&LoginRequest::new("alice", "secret"))
        .await
        .unwrap();

    assert_eq!(portal.requests()[0].path, "/api/v2/cw-login");
}
