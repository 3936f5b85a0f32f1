//! Line-delimited JSON-RPC 2.0 tool server
//!
//! One JSON message per line on the input stream, one response per line on
//! the output stream. Requests are handled concurrently; responses are
//! written as they complete and matched to requests by `id`.
//!
//! Supported methods: `initialize`, `ping`, `tools/list`, `tools/call`.
//! Notifications (messages without an `id`) are accepted and never answered.

use std::sync::Arc;

use serde_json::{json, Value};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::commands::{call_tool, tool_definitions};
use crate::context::AppContext;

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "travex";

/// Protocol-level failures, answered with a JSON-RPC error object.
///
/// Tool failures are not protocol errors: they come back as a successful
/// response whose result is flagged `isError`.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),
}

impl RpcError {
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::Parse(_) => -32700,
            Self::InvalidRequest(_) => -32600,
            Self::MethodNotFound(_) => -32601,
            Self::InvalidParams(_) => -32602,
        }
    }
}

/// Tool server bound to one application context.
pub struct ToolServer {
    ctx: Arc<AppContext>,
}

impl ToolServer {
    #[must_use]
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self { ctx }
    }

    /// Serve until the input stream closes, then finish in-flight requests.
    ///
    /// # Errors
    /// I/O errors on either stream.
    pub async fn serve<R, W>(self: Arc<Self>, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<Value>();
        let mut lines = reader.lines();
        let mut in_flight = JoinSet::new();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if line.trim().is_empty() {
                        continue;
                    }
                    let server = Arc::clone(&self);
                    let tx = tx.clone();
                    in_flight.spawn(async move {
                        if let Some(response) = server.handle_line(&line).await {
                            // Receiver lives until every task is joined
                            let _ = tx.send(response);
                        }
                    });
                }
                Some(response) = rx.recv() => write_message(&mut writer, &response).await?,
            }
        }

        debug!(pending = in_flight.len(), "input closed, draining in-flight requests");
        drop(tx);
        while in_flight.join_next().await.is_some() {}
        while let Some(response) = rx.recv().await {
            write_message(&mut writer, &response).await?;
        }

        info!("tool server stopped");
        Ok(())
    }

    /// Handle one raw message. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<Value> {
        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => return Some(error_response(&Value::Null, &RpcError::Parse(e.to_string()))),
        };
        self.handle_message(message).await
    }

    /// Handle one decoded message. Returns `None` for notifications.
    pub async fn handle_message(&self, message: Value) -> Option<Value> {
        let id = message.get("id").cloned();
        let Some(method) = message.get("method").and_then(Value::as_str) else {
            return Some(error_response(
                &id.unwrap_or(Value::Null),
                &RpcError::InvalidRequest("missing method".into()),
            ));
        };

        let Some(id) = id else {
            debug!(method, "notification received");
            return None;
        };

        let params = message.get("params").cloned().unwrap_or(Value::Null);
        let result = match method {
            "initialize" => Ok(initialize_result()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": tool_definitions() })),
            "tools/call" => self.call(params).await,
            other => Err(RpcError::MethodNotFound(other.to_string())),
        };

        Some(match result {
            Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
            Err(error) => error_response(&id, &error),
        })
    }

    async fn call(&self, params: Value) -> Result<Value, RpcError> {
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| RpcError::InvalidParams("tools/call requires a tool name".into()))?;
        let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);

        Ok(match call_tool(&self.ctx, name, arguments).await {
            Ok(payload) => tool_result(&payload),
            Err(error) => tool_error(&error.to_string()),
        })
    }
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": { "tools": {} },
        "serverInfo": { "name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION") }
    })
}

fn tool_result(payload: &Value) -> Value {
    let text = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
    json!({ "content": [{ "type": "text", "text": text }] })
}

fn tool_error(message: &str) -> Value {
    json!({
        "content": [{ "type": "text", "text": format!("Error: {message}") }],
        "isError": true
    })
}

fn error_response(id: &Value, error: &RpcError) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": error.code(), "message": error.to_string() }
    })
}

async fn write_message<W: AsyncWrite + Unpin>(
    writer: &mut W,
    message: &Value,
) -> std::io::Result<()> {
    let mut bytes = serde_json::to_vec(message).map_err(std::io::Error::other)?;
    bytes.push(b'\n');
    writer.write_all(&bytes).await?;
    writer.flush().await
}
