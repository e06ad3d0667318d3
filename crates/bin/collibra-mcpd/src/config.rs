use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;

use collibra_mcp::CatalogDefaults;
use url::Url;

const DEFAULT_REST_BASE_URL: &str = "https://fedworld.collibra.com";
const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://fedworld.collibra.com/graphql/knowledgeGraph/v1";

#[derive(Parser, Debug)]
#[command(name = "collibra-mcpd", version, about = "Collibra MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "COLLIBRA_REST_BASE_URL", default_value = DEFAULT_REST_BASE_URL)]
    rest_base_url: String,

    #[arg(long, env = "COLLIBRA_GRAPHQL_ENDPOINT", default_value = DEFAULT_GRAPHQL_ENDPOINT)]
    graphql_endpoint: String,

    #[arg(long, env = "COLLIBRA_USERNAME")]
    username: Option<String>,

    #[arg(long, env = "COLLIBRA_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[arg(long, env = "COLLIBRA_MCP_HTTP_ADDR")]
    mcp_http_addr: Option<SocketAddr>,

    #[arg(
        long,
        env = "COLLIBRA_MCP_HTTP_STATEFUL",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    mcp_http_stateful: bool,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Clone)]
pub struct CollibraConfig {
    pub rest_base_url: String,
    pub graphql_endpoint: String,
    pub username: String,
    pub password: String,
    /// Serve streamable HTTP here instead of stdio.
    pub mcp_http_addr: Option<SocketAddr>,
    pub mcp_http_stateful: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "missing required setting: {name}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl CollibraConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }

    pub fn catalog_defaults(&self) -> CatalogDefaults {
        CatalogDefaults::new(
            self.rest_base_url.clone(),
            self.graphql_endpoint.clone(),
            self.username.clone(),
            self.password.clone(),
        )
    }
}

impl TryFrom<CliArgs> for CollibraConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let username = args
            .username
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingSetting("COLLIBRA_USERNAME"))?;
        let password = args
            .password
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingSetting("COLLIBRA_PASSWORD"))?;

        let rest_base_url = require_url("COLLIBRA_REST_BASE_URL", args.rest_base_url)?;
        let graphql_endpoint = require_url("COLLIBRA_GRAPHQL_ENDPOINT", args.graphql_endpoint)?;

        Ok(Self {
            rest_base_url,
            graphql_endpoint,
            username,
            password,
            mcp_http_addr: args.mcp_http_addr,
            mcp_http_stateful: args.mcp_http_stateful,
        })
    }
}

fn require_url(name: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {
            Ok(trimmed.to_string())
        }
        _ => Err(ConfigError::InvalidSetting { name, value }),
    }
}
