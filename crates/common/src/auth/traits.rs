//! Traits for token endpoint operations
//!
//! The token manager talks to the provider only through this seam, so tests
//! can count and script token exchanges without a network.

use async_trait::async_trait;

use super::client::OAuthClientError;
use super::types::{TokenGrant, TokenResponse};

/// Trait for OAuth token endpoint operations
#[async_trait]
pub trait OAuthClientTrait: Send + Sync {
    /// Exchange a grant for a new access token
    ///
    /// # Errors
    /// Returns error if the endpoint is unreachable, rejects the grant, or
    /// returns an unparseable body
    async fn request_token(&self, grant: &TokenGrant) -> Result<TokenResponse, OAuthClientError>;
}
