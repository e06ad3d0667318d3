use std::borrow::Cow;

use collibra_core::CatalogError;
use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content, ErrorCode};
use tracing::warn;
use url::Url;

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

fn invalid_params(message: String) -> ErrorData {
    mcp_err(ErrorCode::INVALID_PARAMS, message)
}

/// Reports a failed catalog call as a tool-level error the agent can read.
pub fn catalog_failure(tool: &str, err: &CatalogError) -> CallToolResult {
    warn!(tool, error = %err, "catalog call failed");
    CallToolResult::error(vec![Content::text(err.to_string())])
}

/// Rejects endpoint overrides that are not absolute URLs.
pub fn check_url(name: &str, value: Option<&str>) -> Result<(), ErrorData> {
    match value {
        Some(raw) => Url::parse(raw)
            .map(|_| ())
            .map_err(|err| invalid_params(format!("{name} must be a valid URL: {err}"))),
        None => Ok(()),
    }
}

/// Rejects numeric parameters outside `min..=max`.
pub fn check_range(
    name: &str,
    value: Option<usize>,
    min: usize,
    max: Option<usize>,
) -> Result<(), ErrorData> {
    let Some(value) = value else {
        return Ok(());
    };
    if value < min {
        return Err(invalid_params(format!("{name} must be at least {min}")));
    }
    if let Some(max) = max.filter(|max| value > *max) {
        return Err(invalid_params(format!("{name} must be at most {max}")));
    }
    Ok(())
}
