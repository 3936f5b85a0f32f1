//! Integration tests for the auth module
//!
//! Drives [`TokenManager`] against a real HTTP token endpoint served by
//! wiremock, covering first-use fetch, rotation and the single-flight
//! guarantee under concurrent callers.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use travex_common::auth::{OAuthClient, TokenManager, TokenManagerError};
use travex_domain::{Credentials, TravexError};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_PATH: &str = "/oauth2/v0/token";

async fn manager_for(server: &MockServer, credentials: &Credentials) -> TokenManager {
    let client = OAuthClient::new(format!("{}{TOKEN_PATH}", server.uri())).unwrap();
    TokenManager::new(client, credentials)
}

/// A manager seeded with only refresh credentials fetches its first token
/// lazily and then serves it from memory.
#[tokio::test]
async fn first_use_fetch_is_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "at-1",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let manager =
        manager_for(&server, &Credentials::with_refresh_token("rt-1", "client", "secret")).await;

    assert_eq!(manager.ensure_access_token().await.unwrap(), "at-1");
    assert_eq!(manager.ensure_access_token().await.unwrap(), "at-1");
}

/// A rotated refresh token is presented on the following refresh.
#[tokio::test]
async fn rotated_refresh_token_is_used_next_time() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("refresh_token=rt-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "at-2", "refresh_token": "rt-2"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("refresh_token=rt-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "at-3"})))
        .expect(1)
        .mount(&server)
        .await;

    let manager = manager_for(
        &server,
        &Credentials::with_refresh_token("rt-1", "client", "secret").access_token("at-1"),
    )
    .await;

    assert_eq!(manager.refresh().await.unwrap(), "at-2");
    assert_eq!(manager.refresh().await.unwrap(), "at-3");
}

/// Concurrent callers that all saw the same token rejected share a single
/// exchange.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_callers_trigger_one_exchange() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "at-2", "refresh_token": "rt-2"}))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let manager = Arc::new(
        manager_for(
            &server,
            &Credentials::with_refresh_token("rt-1", "client", "secret").access_token("at-1"),
        )
        .await,
    );

    let handles: Vec<_> = (0..5)
        .map(|_| {
            let manager = Arc::clone(&manager);
            tokio::spawn(async move { manager.refresh_if_stale(Some("at-1")).await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "at-2");
    }
    assert!(!manager.is_refreshing());
}

/// A rejected exchange maps to the token refresh error with status and body.
#[tokio::test]
async fn rejection_maps_to_token_refresh_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid_client"))
        .mount(&server)
        .await;

    let manager =
        manager_for(&server, &Credentials::with_client_credentials("client", "wrong")).await;

    let err = manager.ensure_access_token().await.unwrap_err();
    assert!(matches!(err, TokenManagerError::RefreshRejected { status: 401, .. }));

    let domain: TravexError = err.into();
    travex_common::assert_error_contains!(Err::<(), _>(domain), "invalid_client");
}
