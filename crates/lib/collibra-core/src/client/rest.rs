use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::{CatalogClient, request_error, transport_error};
use crate::credentials::Credentials;
use crate::error::{CatalogError, CatalogResult};

impl CatalogClient {
    /// Issues an authenticated `GET` for `path_with_query`, resolved against
    /// the credentials' endpoint, and decodes the JSON body.
    ///
    /// # Errors
    /// Returns `CatalogError::Transport` for non-2xx statuses (with the body
    /// read best effort), `CatalogError::MalformedResponse` when the body is
    /// not the expected JSON, and `CatalogError::Request`/`InvalidUrl` when
    /// no response could be obtained.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        credentials: &Credentials,
        path_with_query: &str,
    ) -> CatalogResult<T> {
        let url = resolve_url(&credentials.endpoint, path_with_query)?;
        let target = url.to_string();
        debug!(%target, "collibra GET");

        let response = self
            .http
            .get(url.as_str())
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, credentials.basic_auth_header())
            .send()
            .await
            .map_err(|err| request_error(&target, err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(transport_error(status, target, body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| request_error(&target, err))?;
        serde_json::from_slice(&bytes).map_err(|err| CatalogError::malformed(&target, &err))
    }
}

/// Resolves `target` against `base` the way a browser resolves a link:
/// an absolute path replaces the base path, a full URL replaces everything.
pub(crate) fn resolve_url(base: &str, target: &str) -> CatalogResult<Url> {
    Url::parse(base)
        .and_then(|base_url| base_url.join(target))
        .map_err(|source| CatalogError::InvalidUrl {
            base: base.to_string(),
            target: target.to_string(),
            source,
        })
}
