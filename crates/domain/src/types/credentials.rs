//! Credentials supplied to the token manager at startup

use std::fmt;

use serde::Deserialize;

use crate::errors::{Result, TravexError};

/// OAuth credentials read once at startup.
///
/// Any of the fields may be absent; [`Credentials::validate`] checks that at
/// least one usable combination is present.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl Credentials {
    /// Credentials holding only a pre-issued access token.
    #[must_use]
    pub fn with_access_token(token: impl Into<String>) -> Self {
        Self { access_token: Some(token.into()), ..Self::default() }
    }

    /// Credentials for the refresh-token grant.
    #[must_use]
    pub fn with_refresh_token(
        refresh_token: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            access_token: None,
            refresh_token: Some(refresh_token.into()),
            client_id: Some(client_id.into()),
            client_secret: Some(client_secret.into()),
        }
    }

    /// Credentials for the client-credentials grant.
    #[must_use]
    pub fn with_client_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client_id: Some(client_id.into()),
            client_secret: Some(client_secret.into()),
            ..Self::default()
        }
    }

    /// Builder-style setter used when an access token accompanies refresh
    /// credentials.
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn has_access_token(&self) -> bool {
        present(self.access_token.as_deref())
    }

    #[must_use]
    pub fn has_client_credentials(&self) -> bool {
        present(self.client_id.as_deref()) && present(self.client_secret.as_deref())
    }

    #[must_use]
    pub fn has_refresh_credentials(&self) -> bool {
        present(self.refresh_token.as_deref()) && self.has_client_credentials()
    }

    /// Ensure at least one viable credential combination exists.
    ///
    /// # Errors
    /// Returns [`TravexError::AuthConfig`] when neither an access token nor a
    /// client id/secret pair is configured.
    pub fn validate(&self) -> Result<()> {
        if self.has_access_token() || self.has_client_credentials() {
            return Ok(());
        }
        if present(self.refresh_token.as_deref()) {
            return Err(TravexError::AuthConfig(
                "a refresh token was provided without client id and client secret".into(),
            ));
        }
        Err(TravexError::AuthConfig(
            "no credentials configured: provide an access token, or a client id and secret".into(),
        ))
    }
}

fn present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| if v.is_some() { "<set>" } else { "<unset>" };
        f.debug_struct("Credentials")
            .field("access_token", &redact(&self.access_token))
            .field("refresh_token", &redact(&self.refresh_token))
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .finish()
    }
}
