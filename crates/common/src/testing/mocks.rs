//! Mock implementations for testing
//!
//! [`MockOAuthClient`] replays a queue of scripted token endpoint outcomes and
//! records every grant it receives.

// Mock state sits behind std mutexes; poisoning only happens if a test panics
#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::auth::{OAuthClientError, OAuthClientTrait, TokenGrant, TokenResponse};

/// One scripted token endpoint outcome.
#[derive(Debug, Clone)]
enum ScriptedOutcome {
    Issue(TokenResponse),
    Reject { status: u16, body: String },
}

/// Scripted token endpoint.
///
/// Responses are consumed in order. An exchange with nothing left in the
/// queue fails with [`OAuthClientError::ConfigError`].
#[derive(Debug, Default)]
pub struct MockOAuthClient {
    outcomes: Mutex<VecDeque<ScriptedOutcome>>,
    grants: Mutex<Vec<TokenGrant>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl MockOAuthClient {
    /// Create a mock with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every exchange for `delay` before answering.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a successful token response.
    pub fn push_response(&self, response: TokenResponse) {
        self.outcomes.lock().unwrap().push_back(ScriptedOutcome::Issue(response));
    }

    /// Queue a rejection with the given status and body.
    pub fn push_rejection(&self, status: u16, body: impl Into<String>) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(ScriptedOutcome::Reject { status, body: body.into() });
    }

    /// Number of exchanges attempted.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Grants received, in order.
    #[must_use]
    pub fn grants(&self) -> Vec<TokenGrant> {
        self.grants.lock().unwrap().clone()
    }
}

#[async_trait]
impl OAuthClientTrait for MockOAuthClient {
    async fn request_token(&self, grant: &TokenGrant) -> Result<TokenResponse, OAuthClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.grants.lock().unwrap().push(grant.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let outcome = self.outcomes.lock().unwrap().pop_front();
        match outcome {
            Some(ScriptedOutcome::Issue(response)) => Ok(response),
            Some(ScriptedOutcome::Reject { status, body }) => {
                Err(OAuthClientError::Rejected { status, body })
            }
            None => Err(OAuthClientError::ConfigError("no scripted token response left".into())),
        }
    }
}
