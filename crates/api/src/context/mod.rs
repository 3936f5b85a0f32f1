//! Application context - dependency injection container
//!
//! Built once at startup: configuration → token endpoint client → token
//! manager → resilient Concur client → expense service. Tool handlers only
//! ever see this struct.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use travex_common::auth::{OAuthClient, TokenManager, TokenManagerError};
use travex_core::{ExpenseDefaults, ExpenseProvider, ExpenseService, PerDiemCalculator};
use travex_domain::{Result, TravexError};
use travex_infra::{AppConfig, ConcurClient, HttpClient};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: AppConfig,
    pub tokens: Arc<TokenManager>,
    pub concur: Arc<ConcurClient>,
    pub expenses: ExpenseService,
}

impl AppContext {
    /// Load configuration from the environment (or a config file) and wire
    /// up all services.
    ///
    /// # Errors
    /// Configuration errors, or [`TravexError::AuthConfig`] when no usable
    /// credential combination is present.
    pub fn new() -> Result<Self> {
        let config = travex_infra::load()?;
        Self::from_config(config)
    }

    /// Wire up services from an already-loaded configuration.
    ///
    /// # Errors
    /// [`TravexError::AuthConfig`] for unusable credentials, or a client
    /// construction error.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        config.credentials.validate()?;

        let timeout = Duration::from_secs(config.http_timeout_secs);
        let token_url = config.concur.token_url();
        let oauth = OAuthClient::with_timeout(token_url, timeout)
            .map_err(|e| TravexError::from(TokenManagerError::from(e)))?;
        let tokens = Arc::new(TokenManager::new(oauth, &config.credentials));

        let http = HttpClient::builder().timeout(timeout).build()?;
        let concur =
            Arc::new(ConcurClient::from_parts(http, Arc::clone(&tokens), config.concur.clone()));

        let provider: Arc<dyn ExpenseProvider> = concur.clone();
        let defaults = ExpenseDefaults {
            per_diem_expense_type: config.concur.per_diem_expense_type.clone(),
            currency: config.concur.default_currency.clone(),
        };
        let expenses = ExpenseService::new(provider, PerDiemCalculator::default(), defaults);

        info!(
            base_url = %config.concur.base_url,
            has_access_token = config.credentials.has_access_token(),
            can_refresh = tokens.can_refresh(),
            "application context initialized"
        );

        Ok(Self { config, tokens, concur, expenses })
    }

    /// The expense provider port used by tool handlers.
    #[must_use]
    pub fn provider(&self) -> &Arc<dyn ExpenseProvider> {
        self.expenses.provider()
    }

    #[must_use]
    pub fn calculator(&self) -> &PerDiemCalculator {
        self.expenses.calculator()
    }
}
