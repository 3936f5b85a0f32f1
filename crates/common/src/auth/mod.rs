//! OAuth 2.0 token infrastructure
//!
//! Provides the token lifecycle shared by provider integrations: a token
//! endpoint client and a [`TokenManager`] that owns the current access and
//! refresh tokens for one service process.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  TokenManager   │  Token state + single-flight refresh
//! └────────┬────────┘
//!          │
//!          └──► OAuthClientTrait  (token endpoint exchange)
//!                    │
//!                    └──► OAuthClient (reqwest, form-encoded POST)
//! ```
//!
//! # Usage Example
//!
//! ```no_run
//! use travex_common::auth::{OAuthClient, TokenManager};
//! use travex_domain::Credentials;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::with_refresh_token("rt", "client-id", "client-secret");
//! let client = OAuthClient::new("https://us.api.concursolutions.com/oauth2/v0/token")?;
//! let manager = TokenManager::new(client, &credentials);
//!
//! // Fetches a token on first use, returns the cached one afterwards
//! let token = manager.ensure_access_token().await?;
//! println!("token length: {}", token.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - **[`types`]**: Token grants and token endpoint responses
//! - **[`client`]**: HTTP client for the token endpoint
//! - **[`traits`]**: Seam for swapping the token endpoint in tests
//! - **[`token_manager`]**: Token state and refresh discipline

pub mod client;
pub mod token_manager;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use client::{OAuthClient, OAuthClientError};
pub use token_manager::{TokenManager, TokenManagerError};
pub use traits::OAuthClientTrait;
pub use types::{TokenGrant, TokenResponse};
