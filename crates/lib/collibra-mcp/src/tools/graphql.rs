use collibra_core::Credentials;
use collibra_core::models::Asset;
use collibra_core::paginate::{GRAPHQL_MAX_LIMIT, PageOptions};
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ErrorCode},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{CollibraMcp, helpers};

/// Parameters for fetching assets of one asset type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetsByTypeParams {
    /// Overrides the configured GraphQL endpoint.
    pub endpoint: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Asset type name, e.g. "Data Set".
    pub asset_type_name: String,
    /// Items per request, 1 to 100. Defaults to 100.
    pub limit: Option<usize>,
    /// Upper bound on returned items. Unbounded when omitted.
    pub max_results: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssetsOutput {
    asset_type_name: String,
    returned: usize,
    limit: usize,
    results: Vec<Asset>,
}

#[tool_router(router = tool_router_graphql, vis = "pub")]
impl CollibraMcp {
    #[tool(description = "Fetch Collibra assets by asset type name via GraphQL with limit/offset paging (limit<=100).")]
    async fn collibra_graphql_assets_by_type(
        &self,
        Parameters(params): Parameters<AssetsByTypeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        if params.asset_type_name.trim().is_empty() {
            return Err(helpers::mcp_err(
                ErrorCode::INVALID_PARAMS,
                "assetTypeName is required",
            ));
        }
        helpers::check_range("limit", params.limit, 1, Some(GRAPHQL_MAX_LIMIT))?;
        helpers::check_range("maxResults", params.max_results, 1, None)?;
        let limit = params.limit.unwrap_or(GRAPHQL_MAX_LIMIT);
        let options = PageOptions::new(limit).with_max_results(params.max_results);
        let credentials =
            self.graphql_credentials(params.endpoint, params.username, params.password)?;

        match self
            .control()
            .assets_by_type(&credentials, &params.asset_type_name, options)
            .await
        {
            Ok(collected) => Ok(CallToolResult::success(vec![Content::json(AssetsOutput {
                asset_type_name: params.asset_type_name,
                returned: collected.results.len(),
                limit,
                results: collected.results,
            })?])),
            Err(err) => Ok(helpers::catalog_failure("collibra_graphql_assets_by_type", &err)),
        }
    }
}

impl CollibraMcp {
    fn graphql_credentials(
        &self,
        endpoint: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Credentials, ErrorData> {
        helpers::check_url("endpoint", endpoint.as_deref())?;
        Ok(self.defaults().graphql.with_overrides(endpoint, username, password))
    }
}
