use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::{CatalogClient, request_error, transport_error};
use crate::credentials::Credentials;
use crate::error::{CatalogError, CatalogResult};

const ERROR_DELIMITER: &str = " | ";

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: &'a Map<String, Value>,
}

#[derive(Deserialize)]
struct GraphqlEnvelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphqlErrorEntry>>,
}

/// A single entry of a GraphQL `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlErrorEntry {
    #[serde(default)]
    pub message: String,
}

impl CatalogClient {
    /// Posts `{query, variables}` to the credentials' endpoint and decodes
    /// the `data` field of the response envelope.
    ///
    /// # Errors
    /// Returns `CatalogError::Transport` for non-2xx statuses,
    /// `CatalogError::Request` when a successful body cannot be read,
    /// `CatalogError::MalformedResponse` when the body is not JSON or `data`
    /// does not match `T`, `CatalogError::Query` when `errors` is non-empty
    /// and `CatalogError::MissingData` when `data` is absent or null.
    pub async fn graphql<T: DeserializeOwned>(
        &self,
        credentials: &Credentials,
        query: &str,
        variables: &Map<String, Value>,
    ) -> CatalogResult<T> {
        let target = credentials.endpoint.as_str();
        debug!(%target, "collibra GraphQL POST");

        let response = self
            .http
            .post(target)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, credentials.basic_auth_header())
            .json(&GraphqlRequest { query, variables })
            .send()
            .await
            .map_err(|err| request_error(target, err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(transport_error(status, target.to_string(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|err| request_error(target, err))?;

        let envelope: GraphqlEnvelope =
            serde_json::from_str(&body).map_err(|err| CatalogError::malformed(target, &err))?;
        decode_envelope(target, envelope)
    }
}

fn decode_envelope<T: DeserializeOwned>(target: &str, envelope: GraphqlEnvelope) -> CatalogResult<T> {
    if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
        let message = errors
            .iter()
            .map(|entry| entry.message.as_str())
            .collect::<Vec<_>>()
            .join(ERROR_DELIMITER);
        return Err(CatalogError::Query { message });
    }

    match envelope.data {
        None | Some(Value::Null) => Err(CatalogError::MissingData),
        Some(data) => {
            serde_json::from_value(data).map_err(|err| CatalogError::malformed(target, &err))
        }
    }
}
