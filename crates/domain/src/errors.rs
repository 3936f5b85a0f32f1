//! Error types used throughout the application
//!
//! The taxonomy is closed: callers branch on the variant, never on the text
//! of the message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decoded body of a failed provider response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ApiErrorBody {
    /// Body parsed as JSON
    Json(serde_json::Value),
    /// Body was not JSON but was readable text
    Text(String),
}

/// Non-2xx response from a provider resource endpoint.
///
/// Carries the raw status so callers can tell a 401 from a 403 without
/// inspecting the message.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    pub status_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<ApiErrorBody>,
}

impl ApiError {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        status: u16,
        status_text: impl Into<String>,
        body: Option<ApiErrorBody>,
    ) -> Self {
        Self { message: message.into(), status, status_text: status_text.into(), body }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }

    /// JSON body, when the response carried one.
    #[must_use]
    pub fn body_json(&self) -> Option<&serde_json::Value> {
        match &self.body {
            Some(ApiErrorBody::Json(value)) => Some(value),
            _ => None,
        }
    }
}

/// Main error type for Travex
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum TravexError {
    /// No usable credential combination, or refresh credentials incomplete
    #[error("Authentication configuration error: {0}")]
    AuthConfig(String),

    /// The token endpoint rejected a refresh or client-credentials exchange
    #[error("Token refresh failed (HTTP {status}): {body}")]
    TokenRefresh { status: u16, body: String },

    /// Non-2xx response from a resource endpoint
    #[error(transparent)]
    Api(ApiError),

    /// Per-diem input dates are unparseable or reversed
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Network error: {0}")]
    Network(String),

    /// Response arrived but could not be decoded into the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TravexError {
    /// Stable label suitable for logs and tool payloads.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::AuthConfig(_) => "auth_config",
            Self::TokenRefresh { .. } => "token_refresh",
            Self::Api(_) => "api",
            Self::InvalidDateRange(_) => "invalid_date_range",
            Self::Network(_) => "network",
            Self::Decode(_) => "decode",
            Self::InvalidInput(_) => "invalid_input",
            Self::NotFound(_) => "not_found",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }

    /// The wrapped provider error, if this is an [`TravexError::Api`].
    #[must_use]
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status attached to the error, if any.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            Self::TokenRefresh { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ApiError> for TravexError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

/// Result type alias for Travex operations
pub type Result<T> = std::result::Result<T, TravexError>;
