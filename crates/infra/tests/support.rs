//! Shared harness for Concur integration tests
//!
//! One WireMock server plays both the token endpoint and the Concur API.

#![allow(dead_code)]

use std::sync::Arc;

use travex_common::auth::{OAuthClient, TokenManager};
use travex_domain::constants::CONCUR_TOKEN_PATH;
use travex_domain::Credentials;
use travex_infra::{ConcurClient, ConcurSettings, HttpClient, ResilientClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USER_ID: &str = "0b5d1d2e-user";

pub struct Harness {
    pub server: MockServer,
    pub tokens: Arc<TokenManager>,
    pub client: ConcurClient,
}

impl Harness {
    /// Access token `stale-token`, refresh credentials present.
    pub async fn with_refresh() -> Self {
        Self::start(
            Credentials::with_refresh_token("refresh-1", "client-id", "client-secret")
                .access_token("stale-token"),
            Some(USER_ID),
        )
        .await
    }

    /// Access token only, no way to refresh.
    pub async fn access_token_only() -> Self {
        Self::start(Credentials::with_access_token("static-token"), Some(USER_ID)).await
    }

    pub async fn start(credentials: Credentials, user_id: Option<&str>) -> Self {
        let server = MockServer::start().await;
        let settings = ConcurSettings {
            base_url: server.uri(),
            user_id: user_id.map(str::to_string),
            ..ConcurSettings::default()
        };

        let oauth = OAuthClient::new(settings.token_url()).expect("oauth client");
        let tokens = Arc::new(TokenManager::new(oauth, &credentials));
        let http = HttpClient::new().expect("http client");
        let api = ResilientClient::new(http, Arc::clone(&tokens), server.uri());

        Self { server, tokens, client: ConcurClient::new(api, settings) }
    }

    /// Token endpoint answering with `access_token`, expected `times` calls.
    pub async fn mount_token_endpoint(&self, access_token: &str, times: u64) {
        Mock::given(method("POST"))
            .and(path(CONCUR_TOKEN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": access_token,
                "refresh_token": "refresh-2",
                "expires_in": 3600,
                "token_type": "Bearer"
            })))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Requests received so far whose path matches `wanted`.
    pub async fn count_requests(&self, wanted: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == wanted)
            .count()
    }

    pub async fn total_requests(&self) -> usize {
        self.server.received_requests().await.unwrap_or_default().len()
    }
}

pub fn unauthorized() -> ResponseTemplate {
    ResponseTemplate::new(401).set_body_json(serde_json::json!({
        "error": "invalid_token",
        "error_description": "token expired"
    }))
}
