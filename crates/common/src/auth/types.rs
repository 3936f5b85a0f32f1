//! OAuth 2.0 grant and token response types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grant presented to the token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub enum TokenGrant {
    /// `grant_type=refresh_token`
    RefreshToken { refresh_token: String, client_id: String, client_secret: String },
    /// `grant_type=client_credentials`
    ClientCredentials { client_id: String, client_secret: String },
}

impl TokenGrant {
    /// Value of the `grant_type` form field.
    #[must_use]
    pub fn grant_type(&self) -> &'static str {
        match self {
            Self::RefreshToken { .. } => "refresh_token",
            Self::ClientCredentials { .. } => "client_credentials",
        }
    }

    /// Form-encoded body fields for the token request.
    #[must_use]
    pub fn form_params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::RefreshToken { refresh_token, client_id, client_secret } => vec![
                ("client_id", client_id.clone()),
                ("client_secret", client_secret.clone()),
                ("grant_type", self.grant_type().to_string()),
                ("refresh_token", refresh_token.clone()),
            ],
            Self::ClientCredentials { client_id, client_secret } => vec![
                ("client_id", client_id.clone()),
                ("client_secret", client_secret.clone()),
                ("grant_type", self.grant_type().to_string()),
            ],
        }
    }

    /// Refresh token carried by this grant, if any.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        match self {
            Self::RefreshToken { refresh_token, .. } => Some(refresh_token),
            Self::ClientCredentials { .. } => None,
        }
    }
}

impl fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RefreshToken { client_id, .. } => f
                .debug_struct("RefreshToken")
                .field("client_id", client_id)
                .finish_non_exhaustive(),
            Self::ClientCredentials { client_id, .. } => f
                .debug_struct("ClientCredentials")
                .field("client_id", client_id)
                .finish_non_exhaustive(),
        }
    }
}

/// Token endpoint response.
///
/// Only `access_token` is required. A `refresh_token` is present when the
/// provider rotates refresh tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl TokenResponse {
    /// Response carrying only an access token (no rotation).
    #[must_use]
    pub fn access_only(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            token_type: None,
            expires_in: None,
            scope: None,
        }
    }

    /// Response that rotates the refresh token.
    #[must_use]
    pub fn rotated(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self { refresh_token: Some(refresh_token.into()), ..Self::access_only(access_token) }
    }
}
