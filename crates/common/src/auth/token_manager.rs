//! Token manager with single-flight refresh
//!
//! Manages the OAuth token lifecycle for one service process:
//! - Holds the current access and refresh tokens
//! - Fetches an access token on first use when none was configured
//! - Exchanges the refresh token (or client credentials) for a new access
//!   token, adopting a rotated refresh token when the provider issues one
//! - Serializes refreshes so concurrent callers never spend the same refresh
//!   token twice

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};
use travex_domain::{Credentials, TravexError};

use super::client::{OAuthClient, OAuthClientError};
use super::traits::OAuthClientTrait;
use super::types::TokenGrant;

/// Error type for token manager operations
#[derive(Debug, Error)]
pub enum TokenManagerError {
    /// No credential combination can produce an access token
    #[error("Authentication configuration error: {0}")]
    AuthConfig(String),

    /// Token endpoint rejected the exchange
    #[error("Token refresh rejected (HTTP {status}): {body}")]
    RefreshRejected { status: u16, body: String },

    /// Token endpoint could not be reached
    #[error("Token endpoint unreachable: {0}")]
    Transport(String),

    /// Token endpoint answered with an unusable body
    #[error("Invalid token response: {0}")]
    InvalidResponse(String),
}

impl From<OAuthClientError> for TokenManagerError {
    fn from(err: OAuthClientError) -> Self {
        match err {
            OAuthClientError::Rejected { status, body } => Self::RefreshRejected { status, body },
            OAuthClientError::RequestFailed(e) => Self::Transport(e.to_string()),
            OAuthClientError::ParseError(msg) => Self::InvalidResponse(msg),
            OAuthClientError::ConfigError(msg) => Self::AuthConfig(msg),
        }
    }
}

impl From<TokenManagerError> for TravexError {
    fn from(err: TokenManagerError) -> Self {
        match err {
            TokenManagerError::AuthConfig(msg) => Self::AuthConfig(msg),
            TokenManagerError::RefreshRejected { status, body } => {
                Self::TokenRefresh { status, body }
            }
            TokenManagerError::Transport(msg) => Self::Network(msg),
            TokenManagerError::InvalidResponse(msg) => Self::Decode(msg),
        }
    }
}

/// Mutable token cell. Written only by the exchange path.
#[derive(Debug, Default)]
struct TokenState {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

/// Resets the in-progress flag when an exchange finishes or is dropped.
struct RefreshFlag<'a>(&'a AtomicBool);

impl<'a> RefreshFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for RefreshFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Token manager owning the access/refresh token pair of one service
///
/// Refreshes are single-flight: they run behind an async mutex, and a caller
/// that waited for the mutex re-checks whether the token it saw rejected has
/// already been replaced before issuing its own exchange.
pub struct TokenManager<C: OAuthClientTrait + 'static = OAuthClient> {
    oauth_client: Arc<C>,
    client_id: Option<String>,
    client_secret: Option<String>,
    state: RwLock<TokenState>,
    refresh_gate: Mutex<()>,
    refreshing: AtomicBool,
}

impl<C: OAuthClientTrait + 'static> TokenManager<C> {
    /// Create a new token manager seeded from startup credentials
    #[must_use]
    pub fn new(oauth_client: C, credentials: &Credentials) -> Self {
        Self::with_shared_client(Arc::new(oauth_client), credentials)
    }

    /// Create a token manager around an already shared token endpoint client
    #[must_use]
    pub fn with_shared_client(oauth_client: Arc<C>, credentials: &Credentials) -> Self {
        let non_blank = |v: &Option<String>| v.clone().filter(|s| !s.trim().is_empty());

        let (client_id, client_secret) = if credentials.has_client_credentials() {
            (non_blank(&credentials.client_id), non_blank(&credentials.client_secret))
        } else {
            (None, None)
        };

        Self {
            oauth_client,
            client_id,
            client_secret,
            state: RwLock::new(TokenState {
                access_token: non_blank(&credentials.access_token),
                refresh_token: non_blank(&credentials.refresh_token),
            }),
            refresh_gate: Mutex::new(()),
            refreshing: AtomicBool::new(false),
        }
    }

    /// Return a usable access token, fetching one if none is held
    ///
    /// # Errors
    /// Returns [`TokenManagerError::AuthConfig`] when no token is held and no
    /// client id/secret is configured, or the exchange error otherwise
    pub async fn ensure_access_token(&self) -> Result<String, TokenManagerError> {
        if let Some(token) = self.current_access_token().await {
            return Ok(token);
        }

        if !self.can_refresh() {
            return Err(TokenManagerError::AuthConfig(
                "no access token configured and no client id/secret to obtain one".to_string(),
            ));
        }

        debug!("no access token held, requesting one");
        self.refresh_if_stale(None).await
    }

    /// Unconditionally exchange credentials for a new access token
    ///
    /// Uses the refresh token grant when a refresh token is held, otherwise
    /// the client credentials grant. Waits for any exchange already running.
    ///
    /// # Errors
    /// Returns error if client credentials are missing or the exchange fails
    pub async fn refresh(&self) -> Result<String, TokenManagerError> {
        let _gate = self.refresh_gate.lock().await;
        self.exchange().await
    }

    /// Refresh unless the token a caller saw rejected was already replaced
    ///
    /// `stale_token` is the access token the caller used. If another caller
    /// refreshed while this one waited, the replacement is returned without a
    /// second exchange. `None` means "refresh only if no token is held".
    ///
    /// # Errors
    /// Returns error if client credentials are missing or the exchange fails
    pub async fn refresh_if_stale(
        &self,
        stale_token: Option<&str>,
    ) -> Result<String, TokenManagerError> {
        let _gate = self.refresh_gate.lock().await;

        if let Some(current) = self.current_access_token().await {
            if stale_token != Some(current.as_str()) {
                debug!("access token already replaced by a concurrent refresh");
                return Ok(current);
            }
        }

        self.exchange().await
    }

    /// Whether an exchange can be attempted (client id and secret present)
    #[must_use]
    pub fn can_refresh(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }

    /// Whether an exchange is currently in flight
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::SeqCst)
    }

    /// Current access token without triggering any exchange
    pub async fn current_access_token(&self) -> Option<String> {
        self.state.read().await.access_token.clone()
    }

    /// Current refresh token without triggering any exchange
    pub async fn current_refresh_token(&self) -> Option<String> {
        self.state.read().await.refresh_token.clone()
    }

    /// Build the grant for the next exchange from the held tokens.
    async fn next_grant(&self) -> Result<TokenGrant, TokenManagerError> {
        let (Some(client_id), Some(client_secret)) = (&self.client_id, &self.client_secret) else {
            return Err(TokenManagerError::AuthConfig(
                "client id and client secret are required to refresh the access token"
                    .to_string(),
            ));
        };

        let refresh_token = self.state.read().await.refresh_token.clone();
        Ok(match refresh_token {
            Some(refresh_token) => TokenGrant::RefreshToken {
                refresh_token,
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
            },
            None => TokenGrant::ClientCredentials {
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
            },
        })
    }

    /// Perform one exchange. Callers must hold `refresh_gate`.
    async fn exchange(&self) -> Result<String, TokenManagerError> {
        let grant = self.next_grant().await?;
        let _flag = RefreshFlag::raise(&self.refreshing);

        info!(grant_type = grant.grant_type(), "exchanging credentials for a new access token");

        let response = self.oauth_client.request_token(&grant).await.map_err(|err| {
            warn!(grant_type = grant.grant_type(), error = %err, "token exchange failed");
            TokenManagerError::from(err)
        })?;

        let mut state = self.state.write().await;
        state.access_token = Some(response.access_token.clone());
        if let Some(rotated) = response.refresh_token.filter(|t| !t.is_empty()) {
            debug!("provider rotated the refresh token");
            state.refresh_token = Some(rotated);
        }

        info!("access token refreshed");
        Ok(response.access_token)
    }
}
