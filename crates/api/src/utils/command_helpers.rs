//! Tool execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing tool handlers
//! with timing and logging.

use std::future::Future;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::Value;
use travex_domain::{Result as DomainResult, TravexError};

use crate::utils::logging::{error_label, log_tool_execution};

/// Execute a tool with automatic timing and logging
///
/// Every tool call is logged exactly once on completion, with the error
/// label on failure.
///
/// # Example
///
/// ```rust,ignore
/// execute_tool("list_reports", || async {
///     ctx.provider().list_reports(None).await
/// })
/// .await
/// ```
pub async fn execute_tool<F, Fut, T>(tool_name: &str, tool_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = tool_fn().await;

    let error_type = result.as_ref().err().map(error_label);
    log_tool_execution(tool_name, start.elapsed(), result.is_ok(), error_type);

    result
}

/// Decode tool arguments into a typed request.
///
/// Missing arguments are treated as an empty object so tools without
/// required parameters accept `null`.
///
/// # Errors
/// [`TravexError::InvalidInput`] naming the tool when the arguments do not
/// match.
pub fn parse_args<T: DeserializeOwned>(tool_name: &str, arguments: Value) -> DomainResult<T> {
    let arguments = match arguments {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    };
    serde_json::from_value(arguments)
        .map_err(|e| TravexError::InvalidInput(format!("invalid arguments for {tool_name}: {e}")))
}

/// Serialize a tool result payload.
///
/// # Errors
/// [`TravexError::Internal`] if the payload cannot be represented as JSON.
pub fn to_payload<T: serde::Serialize>(value: &T) -> DomainResult<Value> {
    serde_json::to_value(value).map_err(|e| TravexError::Internal(format!("serialize result: {e}")))
}
