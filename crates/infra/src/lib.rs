//! # Travex Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Plain HTTP client
//! - The resilient Concur request client (bearer auth, refresh-on-401)
//! - Concur domain operations implementing [`travex_core::ExpenseProvider`]
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `travex-core`
//! - Depends on `travex-common` for the token lifecycle
//! - Contains all "impure" code (I/O)

pub mod concur;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use concur::{ConcurClient, RequestBody, RequestOptions, ResilientClient};
pub use config::{load, load_from_env, load_from_file, AppConfig, ConcurSettings};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
