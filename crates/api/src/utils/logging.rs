use std::time::Duration;

use tracing::{info, warn};
use travex_domain::TravexError;

/// Log the outcome of a tool execution with structured fields.
///
/// # Parameters
/// * `tool` - Tool name as exposed over the protocol (e.g. `"create_expense"`).
/// * `elapsed` - Duration the tool execution took.
/// * `success` - Whether the tool completed successfully.
/// * `error_type` - Stable error label on failure, see [`error_label`].
///
/// Callers must avoid forwarding argument values here; they can carry
/// personal data.
#[inline]
pub fn log_tool_execution(
    tool: &str,
    elapsed: Duration,
    success: bool,
    error_type: Option<&str>,
) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(tool, duration_ms, "tool_execution_success");
    } else {
        let error_type = error_type.unwrap_or("unknown");
        warn!(tool, duration_ms, error_type, "tool_execution_failure");
    }
}

/// Convert a `TravexError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &TravexError) -> &'static str {
    error.label()
}
