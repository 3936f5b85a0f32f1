//! Shared infrastructure for Travex crates.
//!
//! Currently hosts the OAuth 2.0 token lifecycle used by every provider
//! integration, plus test doubles for it.
//!
//! # Features
//!
//! - `test-utils`: exposes [`testing`] (mock token endpoint, assertion
//!   helpers) to downstream test suites

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod auth;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::{
    OAuthClient, OAuthClientError, OAuthClientTrait, TokenGrant, TokenManager, TokenManagerError,
    TokenResponse,
};
