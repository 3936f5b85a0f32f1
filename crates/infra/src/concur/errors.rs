//! Concur error response shaping
//!
//! Turns a non-2xx response into an [`ApiError`]: the body is parsed as JSON
//! first, then as text, and a human-readable detail is pulled from the known
//! error shapes and appended to the message.

use reqwest::StatusCode;
use serde_json::Value;
use travex_domain::constants::MAX_PLAIN_TEXT_ERROR_LEN;
use travex_domain::{ApiError, ApiErrorBody};

/// JSON fields that carry a human message, in priority order.
const MESSAGE_FIELDS: [&str; 4] = ["Message", "error_description", "message", "errorMessage"];

/// Decode raw error bytes: JSON, else non-empty UTF-8 text, else nothing.
#[must_use]
pub fn parse_error_body(bytes: Option<&[u8]>) -> Option<ApiErrorBody> {
    let bytes = bytes.filter(|b| !b.is_empty())?;

    if let Ok(json) = serde_json::from_slice::<Value>(bytes) {
        return Some(ApiErrorBody::Json(json));
    }

    std::str::from_utf8(bytes)
        .ok()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(|text| ApiErrorBody::Text(text.to_string()))
}

/// Human-readable detail from a decoded error body.
///
/// Plain text is only used when short enough to be a message rather than a
/// page of HTML.
#[must_use]
pub fn error_detail(body: &ApiErrorBody) -> Option<String> {
    match body {
        ApiErrorBody::Json(json) => json_message(json),
        ApiErrorBody::Text(text) => {
            (text.chars().count() <= MAX_PLAIN_TEXT_ERROR_LEN).then(|| text.clone())
        }
    }
}

fn json_message(json: &Value) -> Option<String> {
    let from_object = |value: &Value| {
        MESSAGE_FIELDS
            .iter()
            .find_map(|field| value.get(field).and_then(Value::as_str))
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    };

    from_object(json).or_else(|| {
        json.get("error").and_then(|e| from_object(e).or_else(|| e.as_str().map(str::to_string)))
    })
}

/// Build the error for a failed call labelled `context`.
///
/// The message always carries the status code and reason phrase, even when
/// the body could not be decoded.
///
/// `status_text` is the canonical reason phrase for the status code, not the
/// phrase the server sent on the wire: `reqwest` does not expose the latter,
/// and HTTP/2 responses have none. Codes without a canonical phrase read
/// `Unknown Status`.
#[must_use]
pub fn api_error(context: &str, status: StatusCode, bytes: Option<&[u8]>) -> ApiError {
    let status_text = status.canonical_reason().unwrap_or("Unknown Status").to_string();
    let body = parse_error_body(bytes);

    let mut message = format!("{context} failed: {} {status_text}", status.as_u16());
    if let Some(detail) = body.as_ref().and_then(error_detail) {
        message.push_str(": ");
        message.push_str(&detail);
    }

    ApiError::new(message, status.as_u16(), status_text, body)
}
