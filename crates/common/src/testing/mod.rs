//! Testing utilities and helpers
//!
//! - **[`assertions`]**: Assertion macros and helpers for error messages and
//!   money amounts
//! - **[`mocks`]**: Scripted token endpoint for token manager tests
//!
//! ## Usage
//!
//! ```rust
//! use travex_common::auth::TokenResponse;
//! use travex_common::testing::MockOAuthClient;
//!
//! let mock = MockOAuthClient::new();
//! mock.push_response(TokenResponse::rotated("at-2", "rt-2"));
//! assert_eq!(mock.call_count(), 0);
//! ```

pub mod assertions;
pub mod mocks;

// Macros exported with #[macro_export] are available at crate root
pub use assertions::assert_money_eq;
pub use mocks::MockOAuthClient;
