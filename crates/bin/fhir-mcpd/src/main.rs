//! Daemon entry point for the FHIR MCP server.
//!
//! Loads configuration from the environment, builds the definition index to
//! completion before accepting any query, and serves the MCP protocol over
//! stdio or streamable HTTP.

mod config;

use std::sync::Arc;

use fhir_core::loader::load_index_async;
use fhir_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::{info, warn};

use crate::config::FhirConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Stdout belongs to the stdio transport; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = FhirConfig::from_args()?;

    let index = load_index_async(config.definitions_path.clone()).await?;
    if index.is_empty() {
        warn!(
            "definitions bundle at {} produced an empty index",
            config.definitions_path.display()
        );
    }
    info!("indexed {} resource definitions", index.resource_count());
    let index = Arc::new(index);

    if config.enable_stdio {
        serve_stdio(index, config.search_limit).await?;
    } else {
        let http_config = McpHttpServerConfig::new(config.mcp_http_addr);
        serve_streamable_http(index, config.search_limit, http_config).await?;
    }
    Ok(())
}
