//! Shared test helpers for `travex-core` integration tests.

pub mod provider;
