#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use serde_json::json;

fn reset_request() -> ResetPasswordRequest {
    ResetPasswordRequest {
        token: "abc".into(),
        user_id: "123".into(),
        password: "supersecret".into(),
        confirm_password: "supersecret".into(),
    }
}

#[tokio::test]
async fn reset_password_posts_wire_payload() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/resetPassword");
        then.status(200)
            .json_body(json!({ "message": "Password reset was successful" }));
    });

    let client = ApiClient::new_with_base_url(server.url("/api"));
    client.reset_password(&reset_request()).await.unwrap();

    let received = server.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].method, POST);
    assert_eq!(received[0].path, "/api/auth/resetPassword");
    assert_eq!(
        received[0].body,
        Some(json!({
            "token": "abc",
            "userId": "123",
            "password": "supersecret",
            "confirm_password": "supersecret"
        }))
    );
}

#[tokio::test]
async fn reset_password_accepts_trailing_slash_in_base_url() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/resetPassword");
        then.status(204);
    });

    let client = ApiClient::new_with_base_url(format!("{}/", server.url("/api")));
    assert!(client.reset_password(&reset_request()).await.is_ok());
}

#[tokio::test]
async fn reset_password_propagates_api_error_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/resetPassword");
        then.status(400).json_body(json!({
            "error": "Invalid or expired password reset token",
            "code": "INVALID_TOKEN"
        }));
    });

    let client = ApiClient::new_with_base_url(server.url("/api"));
    let error = client
        .reset_password(&reset_request())
        .await
        .expect_err("should reject expired token");
    assert_eq!(error.code, "INVALID_TOKEN");
    assert_eq!(error.error, "Invalid or expired password reset token");
}

#[tokio::test]
async fn reset_password_maps_unparsable_error_body_to_status() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/resetPassword");
        then.status(502).json_body(json!("bad gateway"));
    });

    let client = ApiClient::new_with_base_url(server.url("/api"));
    let error = client
        .reset_password(&reset_request())
        .await
        .expect_err("should fail");
    assert_eq!(error.code, "REQUEST_FAILED");
    assert_eq!(error.error, "Request failed with status 502");
}

#[tokio::test]
async fn reset_password_surfaces_transport_errors() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/resetPassword");
        then.transport_error("connection reset");
    });

    let client = ApiClient::new_with_base_url(server.url("/api"));
    let error = client
        .reset_password(&reset_request())
        .await
        .expect_err("should fail");
    assert_eq!(error.code, "REQUEST_FAILED");
}
