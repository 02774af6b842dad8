use graphmark_core::format::{render_detailed, render_summary};
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{GraphmarkMcp, helpers};

/// Parameters for fetching the detailed view of a graph.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetGraphDataParams {
    /// Upstream identifier of the graph to fetch.
    pub graph_id: String,
}

/// Parameters for fetching the summary view of a graph.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetGraphSummaryParams {
    /// Upstream identifier of the graph to fetch.
    pub graph_id: String,
    /// Append the full detailed view below the summary. Defaults to false.
    #[serde(default)]
    pub include_details: bool,
}

#[tool_router(router = tool_router_graph, vis = "pub")]
impl GraphmarkMcp {
    #[tool(
        description = "Fetch a graph record and render the detailed Markdown view: description, basic information, data sources, the data table, and value-column statistics."
    )]
    async fn get_graph_data(
        &self,
        Parameters(params): Parameters<GetGraphDataParams>,
    ) -> Result<CallToolResult, ErrorData> {
        match self.client.fetch_graph(&params.graph_id).await {
            Ok(record) => Ok(CallToolResult::success(vec![Content::text(
                render_detailed(&record, &self.markers),
            )])),
            Err(err) => Ok(helpers::fetch_failure(&params.graph_id, &err)),
        }
    }

    #[tool(
        description = "Fetch a graph record and render a compact summary with best/worst categories and the total. Set includeDetails to true for the full detailed view."
    )]
    async fn get_graph_summary(
        &self,
        Parameters(params): Parameters<GetGraphSummaryParams>,
    ) -> Result<CallToolResult, ErrorData> {
        match self.client.fetch_graph(&params.graph_id).await {
            Ok(record) => Ok(CallToolResult::success(vec![Content::text(
                render_summary(&record, params.include_details, &self.markers),
            )])),
            Err(err) => Ok(helpers::fetch_failure(&params.graph_id, &err)),
        }
    }
}
