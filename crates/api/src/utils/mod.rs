//! Shared helpers for tool handlers

pub mod command_helpers;
pub mod logging;
