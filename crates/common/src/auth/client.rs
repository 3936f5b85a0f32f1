//! OAuth 2.0 token endpoint client
//!
//! Performs form-encoded token exchanges against a provider's token
//! endpoint:
//! - Refresh token grant (with rotation support)
//! - Client credentials grant

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use super::traits::OAuthClientTrait;
use super::types::{TokenGrant, TokenResponse};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error type for OAuth client operations
#[derive(Debug, Error)]
pub enum OAuthClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Token endpoint answered with a non-success status
    #[error("Token endpoint rejected the grant (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    /// Failed to parse response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Token endpoint client
#[derive(Debug, Clone)]
pub struct OAuthClient {
    token_url: String,
    client: Client,
}

impl OAuthClient {
    /// Create a client for the given token endpoint URL
    ///
    /// # Errors
    /// Returns error if the URL is empty or the HTTP client cannot be built
    ///
    /// # Examples
    /// ```
    /// use travex_common::auth::OAuthClient;
    ///
    /// let token_url = "https://us.api.concursolutions.com/oauth2/v0/token";
    /// let client = OAuthClient::new(token_url).unwrap();
    /// assert!(client.token_url().ends_with("/oauth2/v0/token"));
    /// ```
    pub fn new(token_url: impl Into<String>) -> Result<Self, OAuthClientError> {
        Self::with_timeout(token_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom request timeout
    ///
    /// # Errors
    /// Returns error if the URL is empty or the HTTP client cannot be built
    pub fn with_timeout(
        token_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, OAuthClientError> {
        let token_url = token_url.into();
        if token_url.trim().is_empty() {
            return Err(OAuthClientError::ConfigError("token URL is empty".to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { token_url, client })
    }

    /// Get the configured token endpoint URL
    #[must_use]
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Exchange a grant for tokens
    ///
    /// # Errors
    /// Returns error if:
    /// - The request cannot be sent
    /// - The endpoint returns a non-success status
    /// - The response is not a valid token response
    pub async fn request_token(
        &self,
        grant: &TokenGrant,
    ) -> Result<TokenResponse, OAuthClientError> {
        debug!(grant_type = grant.grant_type(), url = %self.token_url, "requesting token");

        let response = self
            .client
            .post(&self.token_url)
            .header("Accept", "application/json")
            .form(&grant.form_params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OAuthClientError::Rejected { status: status.as_u16(), body });
        }

        let token_response: TokenResponse =
            response.json().await.map_err(|e| OAuthClientError::ParseError(e.to_string()))?;

        if token_response.access_token.is_empty() {
            return Err(OAuthClientError::ParseError(
                "token response contained an empty access_token".to_string(),
            ));
        }

        Ok(token_response)
    }
}

#[async_trait]
impl OAuthClientTrait for OAuthClient {
    async fn request_token(&self, grant: &TokenGrant) -> Result<TokenResponse, OAuthClientError> {
        self.request_token(grant).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn refresh_grant() -> TokenGrant {
        TokenGrant::RefreshToken {
            refresh_token: "rt-1".into(),
            client_id: "client".into(),
            client_secret: "secret".into(),
        }
    }

    #[test]
    fn rejects_empty_token_url() {
        assert!(matches!(OAuthClient::new("  "), Err(OAuthClientError::ConfigError(_))));
    }

    #[tokio::test]
    async fn posts_form_encoded_refresh_grant() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/v0/token"))
            .and(body_string_contains("grant_type=refresh_token"))
            .and(body_string_contains("refresh_token=rt-1"))
            .and(body_string_contains("client_id=client"))
            .and(body_string_contains("client_secret=secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "at-2",
                "refresh_token": "rt-2",
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OAuthClient::new(format!("{}/oauth2/v0/token", server.uri())).unwrap();
        let response = client.request_token(&refresh_grant()).await.unwrap();

        assert_eq!(response.access_token, "at-2");
        assert_eq!(response.refresh_token.as_deref(), Some("rt-2"));
    }

    #[tokio::test]
    async fn surfaces_rejection_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string(r#"{"error":"invalid_grant"}"#),
            )
            .mount(&server)
            .await;

        let client = OAuthClient::new(server.uri()).unwrap();
        let err = client.request_token(&refresh_grant()).await.unwrap_err();

        match err {
            OAuthClientError::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("invalid_grant"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejects_non_json_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&server)
            .await;

        let client = OAuthClient::new(server.uri()).unwrap();
        let err = client.request_token(&refresh_grant()).await.unwrap_err();
        assert!(matches!(err, OAuthClientError::ParseError(_)));
    }
}
