use collibra_core::models::{AssetType, Community};
use collibra_core::paginate::{Collected, PageOptions, REST_MAX_PAGE_SIZE};
use collibra_core::queries::{AssetTypeQuery, CommunityQuery, NameMatchMode};
use collibra_core::Credentials;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{CollibraMcp, helpers};

/// Parameters for listing asset types.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetTypesParams {
    /// Overrides the configured REST base URL.
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    /// Defaults to ANYWHERE.
    pub name_match_mode: Option<NameMatchMode>,
    /// Defaults to false.
    pub top_level: Option<bool>,
    /// Defaults to true.
    pub exclude_meta: Option<bool>,
    /// Defaults to false.
    pub exclude_final: Option<bool>,
    /// Defaults to false.
    pub exclude_unlicensed_products: Option<bool>,
    /// Items per request, 1 to 1000. Defaults to 1000.
    pub page_size: Option<usize>,
    /// Upper bound on returned items. Unbounded when omitted.
    pub max_results: Option<usize>,
}

/// Parameters for listing communities.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommunitiesParams {
    /// Overrides the configured REST base URL.
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    /// Only applied together with `name`. Defaults to ANYWHERE.
    pub name_match_mode: Option<NameMatchMode>,
    /// Defaults to true.
    pub exclude_meta: Option<bool>,
    /// Items per request, 1 to 1000. Defaults to 1000.
    pub page_size: Option<usize>,
    /// Upper bound on returned items. Unbounded when omitted.
    pub max_results: Option<usize>,
}

/// Payload returned by the REST list tools.
#[derive(Debug, Serialize)]
struct ListOutput<T> {
    total: u64,
    returned: usize,
    results: Vec<T>,
}

impl<T> From<Collected<T>> for ListOutput<T> {
    fn from(collected: Collected<T>) -> Self {
        Self {
            total: collected.total.unwrap_or_default(),
            returned: collected.results.len(),
            results: collected.results,
        }
    }
}

#[tool_router(router = tool_router_rest, vis = "pub")]
impl CollibraMcp {
    #[tool(description = "List Collibra asset types via REST (/rest/2.0/assetTypes) with automatic pagination.")]
    async fn collibra_asset_types_list(
        &self,
        Parameters(params): Parameters<AssetTypesParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let options = rest_options(params.page_size, params.max_results)?;
        let credentials = self.rest_credentials(params.base_url, params.username, params.password)?;
        let query = AssetTypeQuery {
            name: params.name,
            name_match_mode: params.name_match_mode.unwrap_or_default(),
            top_level: params.top_level.unwrap_or(false),
            exclude_meta: params.exclude_meta.unwrap_or(true),
            exclude_final: params.exclude_final.unwrap_or(false),
            exclude_unlicensed_products: params.exclude_unlicensed_products.unwrap_or(false),
        };

        match self.control().list_asset_types(&credentials, &query, options).await {
            Ok(collected) => Ok(CallToolResult::success(vec![Content::json(
                ListOutput::<AssetType>::from(collected),
            )?])),
            Err(err) => Ok(helpers::catalog_failure("collibra_asset_types_list", &err)),
        }
    }

    #[tool(description = "List Collibra communities via REST (/rest/2.0/communities) with automatic pagination.")]
    async fn collibra_communities_list(
        &self,
        Parameters(params): Parameters<CommunitiesParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let options = rest_options(params.page_size, params.max_results)?;
        let credentials = self.rest_credentials(params.base_url, params.username, params.password)?;
        let query = CommunityQuery {
            name: params.name,
            name_match_mode: params.name_match_mode.unwrap_or_default(),
            exclude_meta: params.exclude_meta.unwrap_or(true),
        };

        match self.control().list_communities(&credentials, &query, options).await {
            Ok(collected) => Ok(CallToolResult::success(vec![Content::json(
                ListOutput::<Community>::from(collected),
            )?])),
            Err(err) => Ok(helpers::catalog_failure("collibra_communities_list", &err)),
        }
    }
}

impl CollibraMcp {
    fn rest_credentials(
        &self,
        base_url: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Credentials, ErrorData> {
        helpers::check_url("baseUrl", base_url.as_deref())?;
        Ok(self.defaults().rest.with_overrides(base_url, username, password))
    }
}

fn rest_options(
    page_size: Option<usize>,
    max_results: Option<usize>,
) -> Result<PageOptions, ErrorData> {
    helpers::check_range("pageSize", page_size, 1, Some(REST_MAX_PAGE_SIZE))?;
    helpers::check_range("maxResults", max_results, 1, None)?;
    Ok(PageOptions::rest(page_size, max_results))
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;
    use serde_json::{Value, json};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::CatalogDefaults;

    fn server_for(mock: &MockServer) -> CollibraMcp {
        CollibraMcp::new(CatalogDefaults::new(
            mock.uri(),
            format!("{}/graphql/knowledgeGraph/v1", mock.uri()),
            "default-user",
            "default-pass",
        ))
    }

    fn text_payload(result: &CallToolResult) -> Value {
        let text = &result.content[0]
            .as_text()
            .expect("tool should return text content")
            .text;
        serde_json::from_str(text).expect("tool output should be JSON")
    }

    #[tokio::test]
    async fn communities_list_reports_total_and_returned() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/2.0/communities"))
            .and(query_param("name", "Finance"))
            .and(query_param("nameMatchMode", "EXACT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total": 1,
                "offset": 0,
                "limit": 1000,
                "results": [{"id": "c-1", "name": "Finance"}]
            })))
            .expect(1)
            .mount(&mock)
            .await;

        let params = CommunitiesParams {
            name: Some("Finance".to_string()),
            name_match_mode: Some(NameMatchMode::Exact),
            ..CommunitiesParams::default()
        };
        let result = server_for(&mock)
            .collibra_communities_list(Parameters(params))
            .await
            .expect("tool call should succeed");

        assert_ne!(result.is_error, Some(true));
        assert_eq!(
            text_payload(&result),
            json!({
                "total": 1,
                "returned": 1,
                "results": [{"id": "c-1", "name": "Finance"}]
            })
        );
    }

    #[tokio::test]
    async fn per_call_credentials_override_defaults() {
        let mock = MockServer::start().await;
        // base64("other:secret")
        Mock::given(method("GET"))
            .and(path("/rest/2.0/assetTypes"))
            .and(header("authorization", "Basic b3RoZXI6c2VjcmV0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total": 0,
                "offset": 0,
                "limit": 1000,
                "results": []
            })))
            .expect(1)
            .mount(&mock)
            .await;

        let params = AssetTypesParams {
            username: Some("other".to_string()),
            password: Some("secret".to_string()),
            ..AssetTypesParams::default()
        };
        let result = server_for(&mock)
            .collibra_asset_types_list(Parameters(params))
            .await
            .expect("tool call should succeed");

        assert_eq!(text_payload(&result)["returned"], 0);
    }

    #[tokio::test]
    async fn catalog_failures_become_tool_errors() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/2.0/assetTypes"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&mock)
            .await;

        let result = server_for(&mock)
            .collibra_asset_types_list(Parameters(AssetTypesParams::default()))
            .await
            .expect("catalog failures are reported in the tool result");

        assert_eq!(result.is_error, Some(true));
        let text = &result.content[0].as_text().expect("text content").text;
        assert!(text.contains("403 Forbidden"));
        assert!(text.contains("Body=forbidden"));
    }

    #[tokio::test]
    async fn out_of_range_page_size_is_invalid_params() {
        let mock = MockServer::start().await;
        let params = CommunitiesParams {
            page_size: Some(1001),
            ..CommunitiesParams::default()
        };

        let err = server_for(&mock)
            .collibra_communities_list(Parameters(params))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn malformed_base_url_override_is_invalid_params() {
        let mock = MockServer::start().await;
        let params = AssetTypesParams {
            base_url: Some("not a url".to_string()),
            ..AssetTypesParams::default()
        };

        let err = server_for(&mock)
            .collibra_asset_types_list(Parameters(params))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn params_schema_lists_match_modes() {
        let schema = serde_json::to_string(&schemars::schema_for!(CommunitiesParams))
            .expect("schema should serialize");

        for mode in ["ANYWHERE", "START", "END", "EXACT"] {
            assert!(schema.contains(mode), "schema should list {mode}");
        }
        assert!(schema.contains("nameMatchMode"));
    }
}
