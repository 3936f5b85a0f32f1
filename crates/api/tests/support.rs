//! Shared helpers for application-layer integration tests

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::Value;
use travex_domain::Credentials;
use travex_infra::{AppConfig, ConcurSettings};
use travex_lib::context::AppContext;
use wiremock::MockServer;

pub const USER_ID: &str = "user-under-test";

/// Context pointed at a mock Concur server with a static access token.
pub async fn setup_test_context() -> (Arc<AppContext>, MockServer) {
    let server = MockServer::start().await;
    let config = AppConfig {
        credentials: Credentials::with_access_token("test-token"),
        concur: ConcurSettings {
            base_url: server.uri(),
            user_id: Some(USER_ID.to_string()),
            ..ConcurSettings::default()
        },
        http_timeout_secs: 5,
    };

    let ctx = AppContext::from_config(config).expect("failed to build application context");
    (Arc::new(ctx), server)
}

/// Text payload of a `tools/call` result.
pub fn result_text(response: &Value) -> &str {
    response["result"]["content"][0]["text"].as_str().expect("tool result should carry text")
}

/// Decoded JSON payload of a successful `tools/call` result.
pub fn result_json(response: &Value) -> Value {
    serde_json::from_str(result_text(response)).expect("tool result text should be JSON")
}
