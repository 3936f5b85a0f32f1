//! # Travex Domain
//!
//! Business domain types and models for Travex.
//!
//! This crate contains:
//! - Per-diem rate and calculation types
//! - Expense report, entry, attendee and receipt models
//! - Travel itinerary and card charge models
//! - Credentials supplied at startup
//! - The closed error taxonomy and `Result` alias
//!
//! ## Architecture
//! - No dependencies on other Travex crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
