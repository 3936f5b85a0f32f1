//! Resilient request client for Concur resource endpoints
//!
//! Every call:
//! 1. Asks the [`TokenManager`] for a usable access token
//! 2. Sends the request with `Authorization: Bearer <token>`
//! 3. On a 401, when a refresh is possible and none was attempted for this
//!    call, refreshes (single-flight) and retries exactly once
//! 4. Turns any remaining non-2xx status into an [`ApiError`](travex_domain::ApiError)

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use travex_common::auth::{OAuthClient, OAuthClientTrait, TokenManager};
use travex_domain::{Result, TravexError};

use super::errors::api_error;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Request payload, by encoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    None,
    Json(Value),
    /// Legacy v1.x XML documents
    Xml(String),
    Bytes { content_type: String, data: Vec<u8> },
}

/// Caller-controlled parts of a request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Extra headers. An `Authorization` entry is ignored.
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl RequestOptions {
    #[must_use]
    pub fn json(body: Value) -> Self {
        Self { body: RequestBody::Json(body), ..Self::default() }
    }

    #[must_use]
    pub fn xml(body: impl Into<String>) -> Self {
        Self { body: RequestBody::Xml(body.into()), ..Self::default() }
    }

    #[must_use]
    pub fn bytes(content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            body: RequestBody::Bytes { content_type: content_type.into(), data },
            ..Self::default()
        }
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Percent-encode one path segment (provider ids may contain `/`, `$`, ...).
#[must_use]
pub fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Authenticated client that recovers once from an expired token
pub struct ResilientClient<C: OAuthClientTrait + 'static = OAuthClient> {
    http: HttpClient,
    tokens: Arc<TokenManager<C>>,
    base_url: String,
}

impl<C: OAuthClientTrait + 'static> ResilientClient<C> {
    #[must_use]
    pub fn new(
        http: HttpClient,
        tokens: Arc<TokenManager<C>>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, tokens, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn tokens(&self) -> &Arc<TokenManager<C>> {
        &self.tokens
    }

    /// Absolute URL for a path relative to the API base.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send an authenticated request and return the successful response.
    ///
    /// `context` labels the operation in errors and logs only.
    ///
    /// # Errors
    /// - Token acquisition or refresh errors ([`TravexError::AuthConfig`],
    ///   [`TravexError::TokenRefresh`])
    /// - [`TravexError::Api`] for a non-2xx final response
    /// - [`TravexError::Network`] when the request cannot be sent
    #[instrument(skip(self, options))]
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        options: &RequestOptions,
        context: &str,
    ) -> Result<Response> {
        let mut token = self.tokens.ensure_access_token().await?;
        let mut retry_on_401 = true;

        loop {
            let response = self.send_once(&method, url, options, &token).await?;

            if response.status() == StatusCode::UNAUTHORIZED
                && retry_on_401
                && self.tokens.can_refresh()
            {
                warn!(context, "access token rejected, refreshing and retrying once");
                retry_on_401 = false;
                token = self.tokens.refresh_if_stale(Some(&token)).await?;
                continue;
            }

            return check_status(response, context).await;
        }
    }

    /// [`Self::request`] and decode a JSON response body.
    ///
    /// # Errors
    /// As [`Self::request`], plus [`TravexError::Decode`] for a body that
    /// does not match `T`.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        options: &RequestOptions,
        context: &str,
    ) -> Result<T> {
        let response = self.request(method, url, options, context).await?;
        decode_json(response, context).await
    }

    /// [`Self::request`] and return the body as text (XML endpoints).
    ///
    /// # Errors
    /// As [`Self::request`], plus [`TravexError::Decode`] if the body cannot
    /// be read.
    pub async fn request_text(
        &self,
        method: Method,
        url: &str,
        options: &RequestOptions,
        context: &str,
    ) -> Result<String> {
        let response = self.request(method, url, options, context).await?;
        response
            .text()
            .await
            .map_err(|e| TravexError::Decode(format!("{context}: unreadable response body: {e}")))
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        options: &RequestOptions,
        token: &str,
    ) -> Result<Response> {
        let mut builder = self.http.request(method.clone(), url);

        let mut has_accept = false;
        for (name, value) in &options.headers {
            if name.eq_ignore_ascii_case(AUTHORIZATION.as_str()) {
                debug!("ignoring caller-supplied Authorization header");
                continue;
            }
            has_accept |= name.eq_ignore_ascii_case(ACCEPT.as_str());
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !has_accept {
            builder = builder.header(ACCEPT, "application/json");
        }

        builder = match &options.body {
            RequestBody::None => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Xml(xml) => {
                builder.header(CONTENT_TYPE, "application/xml").body(xml.clone())
            }
            RequestBody::Bytes { content_type, data } => {
                builder.header(CONTENT_TYPE, content_type.as_str()).body(data.clone())
            }
        };

        self.http.send(builder.bearer_auth(token)).await
    }
}

async fn check_status(response: Response, context: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let bytes = response.bytes().await.ok();
    let error = api_error(context, status, bytes.as_deref());
    warn!(context, status = status.as_u16(), "request failed");
    Err(error.into())
}

/// Decode a JSON body, treating an empty body as `null`.
///
/// # Errors
/// Returns [`TravexError::Decode`] when the body does not match `T`.
pub async fn decode_json<T: DeserializeOwned>(response: Response, context: &str) -> Result<T> {
    let bytes = response.bytes().await.map_err(|e| TravexError::from(InfraError::from(e)))?;
    let slice: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) { b"null" } else { &bytes };

    serde_json::from_slice(slice)
        .map_err(|e| TravexError::Decode(format!("{context}: unexpected response shape: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_percent_encoded() {
        assert_eq!(segment("gWv$sIq/xZ9"), "gWv%24sIq%2FxZ9");
        assert_eq!(segment("plain123"), "plain123");
    }

    #[test]
    fn options_builders() {
        let options = RequestOptions::xml("<a/>").header("X-Trace", "1");
        assert_eq!(options.body, RequestBody::Xml("<a/>".into()));
        assert_eq!(options.headers, vec![("X-Trace".to_string(), "1".to_string())]);
    }
}
