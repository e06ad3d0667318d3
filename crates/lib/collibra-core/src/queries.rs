//! Request targets for the catalog list tools.
//!
//! REST queries render one page's path and query string; the GraphQL query is
//! a fixed document paged through `$limit` and `$offset`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::form_urlencoded;

pub const ASSET_TYPES_PATH: &str = "/rest/2.0/assetTypes";
pub const COMMUNITIES_PATH: &str = "/rest/2.0/communities";

/// List field of the assets-by-type query response.
pub const ASSETS_FIELD: &str = "assets";

pub const ASSETS_BY_TYPE_QUERY: &str = r"
query AssetsByType($limit: Int!, $offset: Int!, $typeName: String!) {
  assets(limit: $limit, offset: $offset, where: { type: { name: { eq: $typeName } } }) {
    displayName
    stringAttributes { type { name } stringValue }
    booleanAttributes { type { name } booleanValue }
    numericAttributes { type { name } numericValue }
    dateAttributes { type { name } dateValue }
    multiValueAttributes { type { name } stringValues }
    responsibilities { role { name } user { fullName } }
    type { name }
    status { name }
    tags { name }
  }
}
";

/// How the `name` filter is matched by the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NameMatchMode {
    #[default]
    Anywhere,
    Start,
    End,
    Exact,
}

impl NameMatchMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anywhere => "ANYWHERE",
            Self::Start => "START",
            Self::End => "END",
            Self::Exact => "EXACT",
        }
    }
}

/// Filters for `GET /rest/2.0/assetTypes`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct AssetTypeQuery {
    pub name: Option<String>,
    pub name_match_mode: NameMatchMode,
    pub top_level: bool,
    pub exclude_meta: bool,
    pub exclude_final: bool,
    pub exclude_unlicensed_products: bool,
}

impl Default for AssetTypeQuery {
    fn default() -> Self {
        Self {
            name: None,
            name_match_mode: NameMatchMode::Anywhere,
            top_level: false,
            exclude_meta: true,
            exclude_final: false,
            exclude_unlicensed_products: false,
        }
    }
}

impl AssetTypeQuery {
    #[must_use]
    pub fn path(&self, offset: usize, limit: usize) -> String {
        let mut query = paging_query(offset, limit);
        query
            .append_pair("nameMatchMode", self.name_match_mode.as_str())
            .append_pair("excludeMeta", bool_str(self.exclude_meta))
            .append_pair("excludeFinal", bool_str(self.exclude_final))
            .append_pair(
                "excludeUnlicensedProducts",
                bool_str(self.exclude_unlicensed_products),
            )
            .append_pair("topLevel", bool_str(self.top_level));
        if let Some(name) = non_empty(self.name.as_deref()) {
            query.append_pair("name", name);
        }
        format!("{ASSET_TYPES_PATH}?{}", query.finish())
    }
}

/// Filters for `GET /rest/2.0/communities`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityQuery {
    pub name: Option<String>,
    pub name_match_mode: NameMatchMode,
    pub exclude_meta: bool,
}

impl Default for CommunityQuery {
    fn default() -> Self {
        Self {
            name: None,
            name_match_mode: NameMatchMode::Anywhere,
            exclude_meta: true,
        }
    }
}

impl CommunityQuery {
    /// `nameMatchMode` is only sent together with `name`.
    #[must_use]
    pub fn path(&self, offset: usize, limit: usize) -> String {
        let mut query = paging_query(offset, limit);
        query.append_pair("excludeMeta", bool_str(self.exclude_meta));
        if let Some(name) = non_empty(self.name.as_deref()) {
            query
                .append_pair("name", name)
                .append_pair("nameMatchMode", self.name_match_mode.as_str());
        }
        format!("{COMMUNITIES_PATH}?{}", query.finish())
    }
}

/// Filter variables for [`ASSETS_BY_TYPE_QUERY`].
#[must_use]
pub fn assets_by_type_variables(type_name: &str) -> Map<String, Value> {
    let mut variables = Map::new();
    variables.insert("typeName".to_string(), Value::from(type_name));
    variables
}

fn paging_query(offset: usize, limit: usize) -> form_urlencoded::Serializer<'static, String> {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("offset", &offset.to_string())
        .append_pair("limit", &limit.to_string())
        .append_pair("countLimit", "-1");
    query
}

const fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
