//! # Travex App
//!
//! Tool-call application layer - tool handlers, server and entry point.
//!
//! This crate contains:
//! - Tool handlers (protocol → service bridge)
//! - Application context (dependency injection)
//! - The stdio JSON-RPC tool server
//!
//! ## Architecture
//! - Depends on `common`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Exposes every workflow as a named tool

pub mod commands;
pub mod context;
pub mod server;
pub mod utils;

// Re-export for convenience
pub use commands::{call_tool, tool_definitions, ToolDefinition};
pub use context::*;
pub use server::ToolServer;
