use graphmark_core::client::FetchError;
use rmcp::model::{CallToolResult, Content};

/// Converts a fetch failure into tool error content. The dispatch boundary
/// reports the cause and keeps the process serving.
pub(crate) fn fetch_failure(graph_id: &str, err: &FetchError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!(
        "failed to fetch graph {graph_id}: {err}"
    ))])
}
