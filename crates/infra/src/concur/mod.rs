//! SAP Concur integration
//!
//! Everything that talks to Concur goes through [`ResilientClient`], which
//! attaches the bearer token and recovers once from an expired one. The
//! domain operations on [`ConcurClient`] only build request bodies and shape
//! responses.
//!
//! # Module Organization
//!
//! - **[`client`]**: Authenticated requests with refresh-on-401
//! - **[`errors`]**: Non-2xx responses into `ApiError`
//! - **[`xml`]**: Field extraction for legacy XML endpoints
//! - **[`shapes`]**: Wire formats per API generation
//! - **[`service`]**: `ConcurClient` and identity resolution
//! - `reports`, `expenses`, `lookup`, `attendees`, `receipts`: operations
//! - `provider`: the `ExpenseProvider` port implementation

pub mod client;
pub mod errors;
pub mod service;
pub mod shapes;
pub mod xml;

mod attendees;
mod expenses;
mod lookup;
mod provider;
mod receipts;
mod reports;

pub use client::{decode_json, segment, RequestBody, RequestOptions, ResilientClient};
pub use errors::api_error;
pub use service::ConcurClient;
pub use xml::XmlFields;
