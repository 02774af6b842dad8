//! Daemon entry point for the graphmark MCP server.
//!
//! Loads configuration from the environment, builds the fetch client, and
//! serves the MCP protocol over stdio and/or streamable HTTP. Logging goes to
//! stderr so stdout stays reserved for the stdio transport.

mod config;

use std::sync::Arc;

use graphmark_core::client::GraphClient;
use graphmark_mcp::server::{self, McpHttpServerConfig};
use tracing_subscriber::EnvFilter;

use crate::config::GraphmarkConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GraphmarkConfig::from_args()?;
    let client = Arc::new(GraphClient::new(&config.client())?);
    tracing::info!(
        base_url = %config.base_url,
        stdio = config.enable_stdio,
        http = config.http_serve,
        "graphmark-mcpd started"
    );

    if config.http_serve {
        let http_config = McpHttpServerConfig::new(config.mcp_http_addr);
        if config.enable_stdio {
            let http_client = client.clone();
            let http_markers = config.markers.clone();
            tokio::spawn(async move {
                if let Err(err) =
                    server::serve_streamable_http(http_client, http_markers, http_config).await
                {
                    tracing::error!(error = %err, "streamable HTTP server terminated");
                }
            });
        } else {
            server::serve_streamable_http(client, config.markers, http_config).await?;
            return Ok(());
        }
    }

    server::serve_stdio(client, config.markers).await?;
    Ok(())
}
