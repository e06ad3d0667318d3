//! Daemon entry point for the Collibra MCP server.
//!
//! Loads configuration from the environment and serves the MCP protocol over
//! stdio, or over streamable HTTP when an address is configured.

mod config;

use collibra_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CollibraConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // stdout carries the stdio transport, so logs go to stderr.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "collibra_mcpd=info,collibra_mcp=info,collibra_core=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CollibraConfig::from_args()?;
    info!(
        rest_base_url = %config.rest_base_url,
        graphql_endpoint = %config.graphql_endpoint,
        "loaded configuration"
    );
    let defaults = config.catalog_defaults();

    match config.mcp_http_addr {
        Some(addr) => {
            let http_config =
                McpHttpServerConfig::new(addr).with_stateful_mode(config.mcp_http_stateful);
            serve_streamable_http(defaults, http_config).await
        }
        None => serve_stdio(defaults).await,
    }
}
