//! Authentication API integration tests
//!
//! Runs the login, register and refresh calls against a wiremock server and
//! checks what went over the wire and how replies are read back.

mod common;

use assert_matches::assert_matches;
use authportal::egui_app::{login, refresh_token, register, ApiError};
use authportal::shared::{LoginPayload, RegisterPayload, Role};
use common::{client_for, MockApi};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn login_payload(identifier: &str) -> LoginPayload {
    LoginPayload {
        identifier: identifier.to_string(),
        password: "password123".to_string(),
    }
}

fn register_payload() -> RegisterPayload {
    RegisterPayload {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "password123".to_string(),
        role: Role::Admin,
    }
}

#[tokio::test]
async fn test_login_posts_payload_as_json() {
    let api = MockApi::start().await;
    api.expect_post(
        "/login",
        ResponseTemplate::new(200)
            .set_body_json(json!({"accessToken": "access-1", "refreshToken": "refresh-1"})),
    )
    .await;

    let tokens = assert_tokens!(login(&api.client, &login_payload("ada")).await);
    assert_eq!(tokens.access_token, "access-1");
    assert_eq!(tokens.refresh_token.as_deref(), Some("refresh-1"));

    let requests = api.requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method.as_str(), "POST");
    assert_eq!(request.url.path(), "/login");
    assert_eq!(
        request.headers.get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(body, json!({"identifier": "ada", "password": "password123"}));
}

#[tokio::test]
async fn test_register_posts_payload_unmodified() {
    let api = MockApi::start().await;
    api.expect_post(
        "/register",
        ResponseTemplate::new(201).set_body_json(json!({"accessToken": "new-account"})),
    )
    .await;

    let payload = register_payload();
    let tokens = assert_tokens!(register(&api.client, &payload).await);
    assert_eq!(tokens.access_token, "new-account");
    assert!(tokens.refresh_token.is_none());

    let requests = api.requests().await;
    assert_eq!(requests.len(), 1);
    let sent: RegisterPayload = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent, payload);
    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(&requests[0].body).unwrap()["role"],
        json!("admin")
    );
}

#[tokio::test]
async fn test_refresh_sends_token_as_json_string() {
    let api = MockApi::start().await;
    api.expect_post(
        "/refresh",
        ResponseTemplate::new(200).set_body_json(json!({"accessToken": "access-2"})),
    )
    .await;

    let tokens = assert_tokens!(refresh_token(&api.client, "abc123").await);
    assert_eq!(tokens.access_token, "access-2");

    let requests = api.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/refresh");
    assert_eq!(requests[0].body, b"\"abc123\"".to_vec());
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, json!("abc123"));
    assert_eq!(
        requests[0].headers.get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
}

#[tokio::test]
async fn test_unrecognized_json_reply() {
    let api = MockApi::start().await;
    api.expect_post(
        "/login",
        ResponseTemplate::new(200).set_body_json(json!({"token": "legacy", "user": {"id": 1}})),
    )
    .await;

    let other = assert_unrecognized!(login(&api.client, &login_payload("ada")).await);
    assert_eq!(other.status, 200);
    assert_eq!(other.body["token"], json!("legacy"));
}

#[tokio::test]
async fn test_unrecognized_text_reply() {
    let api = MockApi::start().await;
    api.expect_post("/register", ResponseTemplate::new(200).set_body_string("created"))
        .await;

    let other = assert_unrecognized!(register(&api.client, &register_payload()).await);
    assert_eq!(other.body, json!("created"));
}

#[tokio::test]
async fn test_status_error_is_passed_through() {
    let api = MockApi::start().await;
    api.expect_post(
        "/login",
        ResponseTemplate::new(401).set_body_json(json!({"message": "bad credentials"})),
    )
    .await;

    let err = login(&api.client, &login_payload("ada")).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
    assert_matches!(err, ApiError::Http(ref e) if e.is_status());
    assert_contains!(err.to_string(), "401");
}

#[tokio::test]
async fn test_server_errors_not_distinguished_from_client_errors() {
    let api = MockApi::start().await;
    api.expect_post("/refresh", ResponseTemplate::new(503)).await;

    let err = refresh_token(&api.client, "abc123").await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(503));
    assert_matches!(err, ApiError::Http(_));
}

#[tokio::test]
async fn test_connection_error_is_passed_through() {
    // Nothing listens on the discard port.
    let client = client_for("http://127.0.0.1:9");

    let err = login(&client, &login_payload("ada")).await.unwrap_err();
    assert!(err.is_connect(), "expected a connect error, got {:?}", err);
    assert!(err.status().is_none());
}

#[tokio::test]
async fn test_concurrent_logins_are_independent() {
    let server = MockServer::start().await;
    for (identifier, token) in [("ada", "token-ada"), ("bob", "token-bob")] {
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(json!({"identifier": identifier, "password": "password123"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": token})))
            .expect(1)
            .mount(&server)
            .await;
    }
    let client = client_for(&server.uri());

    let ada = login_payload("ada");
    let bob = login_payload("bob");
    let (first, second) = tokio::join!(login(&client, &ada), login(&client, &bob));

    assert_eq!(assert_tokens!(first).access_token, "token-ada");
    assert_eq!(assert_tokens!(second).access_token, "token-bob");
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "a"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&format!("{}/api/v1", server.uri()));
    assert_tokens!(login(&client, &login_payload("ada")).await);
}
