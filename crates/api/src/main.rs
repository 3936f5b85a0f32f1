//! Travex - travel and expense tool server
//!
//! Main entry point. Speaks line-delimited JSON-RPC on stdin/stdout; all
//! logging goes to stderr.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;
use travex_lib::{AppContext, ToolServer};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the filter so RUST_LOG can come from it
    let dotenv = dotenvy::dotenv();
    init_tracing();

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!("no .env file loaded: {e}"),
    }

    tracing::info!("Travex starting...");
    let ctx = AppContext::new().context("failed to initialize application context")?;

    let server = Arc::new(ToolServer::new(Arc::new(ctx)));
    tracing::info!("Travex initialized, serving tools on stdio");

    server
        .serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .context("tool server I/O failed")?;

    Ok(())
}
