//! Concur API client: configuration and identity

use std::sync::Arc;

use reqwest::Method;
use tokio::sync::OnceCell;
use tracing::{debug, info};
use travex_common::auth::{OAuthClient, OAuthClientTrait, TokenManager};
use travex_domain::{Result, TravexError};

use super::client::{RequestOptions, ResilientClient};
use super::shapes::v4;
use crate::config::ConcurSettings;
use crate::http::HttpClient;

pub(crate) const IDENTITY_PATH: &str = "/profile/identity/v4/Me";

/// Concur domain operations on top of a [`ResilientClient`].
///
/// Operations are grouped by resource in sibling modules (`reports`,
/// `expenses`, `lookup`, `attendees`, `receipts`).
pub struct ConcurClient<C: OAuthClientTrait + 'static = OAuthClient> {
    pub(crate) api: ResilientClient<C>,
    pub(crate) settings: ConcurSettings,
    user_id: OnceCell<String>,
}

impl<C: OAuthClientTrait + 'static> ConcurClient<C> {
    #[must_use]
    pub fn new(api: ResilientClient<C>, settings: ConcurSettings) -> Self {
        let user_id = settings
            .user_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map_or_else(OnceCell::new, |id| OnceCell::new_with(Some(id.to_string())));

        Self { api, settings, user_id }
    }

    /// Build the full stack from settings and a token manager.
    #[must_use]
    pub fn from_parts(
        http: HttpClient,
        tokens: Arc<TokenManager<C>>,
        settings: ConcurSettings,
    ) -> Self {
        let api = ResilientClient::new(http, tokens, settings.base_url.clone());
        Self::new(api, settings)
    }

    #[must_use]
    pub fn settings(&self) -> &ConcurSettings {
        &self.settings
    }

    #[must_use]
    pub fn api(&self) -> &ResilientClient<C> {
        &self.api
    }

    /// UUID of the user the token belongs to.
    ///
    /// Uses the configured id when present, otherwise asks the identity
    /// endpoint once and caches the answer for the process lifetime.
    ///
    /// # Errors
    /// Propagates request errors; [`TravexError::Decode`] if the identity
    /// response has no usable id.
    pub async fn user_id(&self) -> Result<String> {
        let id = self
            .user_id
            .get_or_try_init(|| async {
                debug!("resolving current user via identity endpoint");
                let identity: v4::Identity = self
                    .api
                    .request_json(
                        Method::GET,
                        &self.api.url(IDENTITY_PATH),
                        &RequestOptions::default(),
                        "resolve user identity",
                    )
                    .await?;

                let id = identity.id.trim().to_string();
                if id.is_empty() {
                    return Err(TravexError::Decode("identity response has an empty id".into()));
                }
                info!("resolved current user identity");
                Ok(id)
            })
            .await?;

        Ok(id.clone())
    }
}

#[cfg(test)]
mod tests {
    use travex_domain::Credentials;

    use super::*;

    fn client(settings: ConcurSettings) -> ConcurClient {
        let credentials = Credentials::with_access_token("token");
        let oauth = OAuthClient::new(settings.token_url()).unwrap();
        let tokens = Arc::new(TokenManager::new(oauth, &credentials));
        ConcurClient::from_parts(HttpClient::new().unwrap(), tokens, settings)
    }

    #[tokio::test]
    async fn configured_user_id_skips_identity_lookup() {
        let settings = ConcurSettings {
            base_url: "http://127.0.0.1:9".into(),
            user_id: Some(" user-123 ".into()),
            ..ConcurSettings::default()
        };

        assert_eq!(client(settings).user_id().await.unwrap(), "user-123");
    }

    #[test]
    fn base_url_comes_from_settings() {
        let settings = ConcurSettings {
            base_url: "https://eu.example.test/".into(),
            ..ConcurSettings::default()
        };
        let client = client(settings);
        assert_eq!(
            client.api().url("/api/v3.0/expense/reports"),
            "https://eu.example.test/api/v3.0/expense/reports"
        );
    }
}
