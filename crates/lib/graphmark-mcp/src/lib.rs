//! MCP server implementation for graphmark.
//!
//! This crate wires the fetch client and formatter into rmcp tool handlers
//! and exposes the MCP-facing API surface for graph rendering.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use graphmark_core::client::GraphClient;
use graphmark_core::format::ColumnMarkers;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};

const SERVER_INSTRUCTIONS: &str = r"graphmark provides MCP tools for fetching upstream graph records and rendering them as Markdown.

Tools:
- `get_graph_data` fetches a graph by `graphId` and returns the detailed view:
  description, basic information, data sources, the full data table, and
  statistics (sum, mean, max, min, count) over the value column.
- `get_graph_summary` returns a compact summary with best/worst categories and
  the total. Pass `includeDetails: true` to append the detailed view.
- `health` returns `ok`.

Notes:
- `graphId` is the upstream identifier and is echoed back in the output.
- Cells in columns whose name contains the configured value marker render as
  percentages (`0.134` becomes `13.4%`); non-numeric cells pass through.
- Fetch failures (network, HTTP status, upstream status field) come back as
  tool error content; the server keeps running.";

/// MCP server wrapper around the fetch client and formatter settings.
#[derive(Clone)]
pub struct GraphmarkMcp {
    tool_router: ToolRouter<Self>,
    client: Arc<GraphClient>,
    markers: ColumnMarkers,
}

impl GraphmarkMcp {
    /// Creates a new server owning its fetch client.
    #[must_use]
    pub fn new(client: GraphClient, markers: ColumnMarkers) -> Self {
        Self::with_client(Arc::new(client), markers)
    }

    /// Creates a new server using a shared fetch client handle.
    #[must_use]
    pub fn with_client(client: Arc<GraphClient>, markers: ColumnMarkers) -> Self {
        let tool_router = Self::tool_router_core() + Self::tool_router_graph();
        Self {
            tool_router,
            client,
            markers,
        }
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl GraphmarkMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for GraphmarkMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
