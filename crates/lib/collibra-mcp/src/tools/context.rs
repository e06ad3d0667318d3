use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::CollibraMcp;

/// Payload listing the MCP commands this server offers.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HelpCommands {
    pub commands: Vec<String>,
}

impl Default for HelpCommands {
    fn default() -> Self {
        Self {
            commands: vec![
                "help - List the MCP commands of this server.".to_string(),
                "health - Returns 'ok'.".to_string(),
                "collibra_asset_types_list - List asset types via REST. Filters: name, nameMatchMode, topLevel, excludeMeta, excludeFinal, excludeUnlicensedProducts."
                    .to_string(),
                "collibra_communities_list - List communities via REST. Filters: name, nameMatchMode, excludeMeta."
                    .to_string(),
                "collibra_graphql_assets_by_type - Fetch assets of one asset type (assetTypeName) via GraphQL, including attributes, responsibilities, status and tags."
                    .to_string(),
                "All list tools accept maxResults and per-call baseUrl/endpoint, username and password overrides."
                    .to_string(),
            ],
        }
    }
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl CollibraMcp {
    #[tool(description = "List the MCP commands to get context with how this MCP server works.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(HelpCommands::default())?]))
    }
}
