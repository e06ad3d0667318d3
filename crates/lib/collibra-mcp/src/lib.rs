//! MCP server implementation for collibra-mcp.
//!
//! This crate wires the catalog control plane into rmcp tool handlers and
//! exposes the MCP-facing surface for listing asset types, communities and
//! assets.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use collibra_core::{CatalogControl, Credentials};
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};

pub use tools::graphql::AssetsByTypeParams;
pub use collibra_core::queries::NameMatchMode;
pub use tools::rest::{AssetTypesParams, CommunitiesParams};

pub const SERVER_NAME: &str = "collibra-rest-graphql-mcp";

const SERVER_INSTRUCTIONS: &str = r"collibra-mcp exposes read-only Collibra catalog queries.

Tools:
- `collibra_asset_types_list` lists asset types via REST (/rest/2.0/assetTypes).
- `collibra_communities_list` lists communities via REST (/rest/2.0/communities).
- `collibra_graphql_assets_by_type` fetches assets of one asset type via GraphQL.

Notes:
- Every tool pages through the full collection. Use `maxResults` to cap the result size.
- REST `pageSize` is at most 1000; GraphQL `limit` is at most 100.
- `baseUrl`/`endpoint`, `username` and `password` override the server defaults for one call.
- `help` lists the tools, `health` returns `ok`.";

/// Credentials applied when a tool call does not override them.
#[derive(Debug, Clone)]
pub struct CatalogDefaults {
    pub rest: Credentials,
    pub graphql: Credentials,
}

impl CatalogDefaults {
    #[must_use]
    pub fn new(
        rest_base_url: impl Into<String>,
        graphql_endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let username = username.into();
        let password = password.into();
        Self {
            rest: Credentials::new(rest_base_url, username.clone(), password.clone()),
            graphql: Credentials::new(graphql_endpoint, username, password),
        }
    }
}

/// MCP server wrapper around the catalog control plane and tool routers.
#[derive(Clone)]
pub struct CollibraMcp {
    tool_router: ToolRouter<Self>,
    control: CatalogControl,
    defaults: Arc<CatalogDefaults>,
}

impl CollibraMcp {
    /// Creates a new server with its own HTTP client.
    #[must_use]
    pub fn new(defaults: CatalogDefaults) -> Self {
        Self::with_control(CatalogControl::default(), Arc::new(defaults))
    }

    /// Creates a new server sharing an existing control plane and defaults.
    #[must_use]
    pub fn with_control(control: CatalogControl, defaults: Arc<CatalogDefaults>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_rest()
            + Self::tool_router_graphql()
            + Self::tool_router_context();
        Self {
            tool_router,
            control,
            defaults,
        }
    }

    pub(crate) const fn control(&self) -> &CatalogControl {
        &self.control
    }

    pub(crate) fn defaults(&self) -> &CatalogDefaults {
        &self.defaults
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl CollibraMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for CollibraMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
