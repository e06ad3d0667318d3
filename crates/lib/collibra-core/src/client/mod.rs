//! Authenticated request executors.
//!
//! Each call performs exactly one HTTP request with a Basic credential header
//! and either decodes the payload or returns a [`CatalogError`].

mod graphql;
mod rest;

pub use graphql::GraphqlErrorEntry;

use reqwest::StatusCode;
use tracing::warn;

use crate::error::CatalogError;

/// Thin wrapper over a `reqwest` client that speaks to Collibra.
#[derive(Debug, Clone, Default)]
pub struct CatalogClient {
    http: reqwest::Client,
}

impl CatalogClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the HTTP client, e.g. to set proxies or TLS roots.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }
}

fn transport_error(status: StatusCode, target: String, body: String) -> CatalogError {
    warn!(status = status.as_u16(), %target, "collibra request rejected");
    CatalogError::Transport {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        target,
        body,
    }
}

fn request_error(target: &str, source: reqwest::Error) -> CatalogError {
    warn!(%target, error = %source, "collibra request failed");
    CatalogError::Request {
        target: target.to_string(),
        source,
    }
}
