use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{Page, PageSource};
use crate::client::CatalogClient;
use crate::credentials::Credentials;
use crate::error::{CatalogError, CatalogResult};

/// Pages of a GraphQL list field queried with `limit`/`offset` variables.
///
/// The query must declare `$limit` and `$offset`; the remaining variables
/// are passed through untouched on every page.
pub struct GraphqlPages<'a, T> {
    client: &'a CatalogClient,
    credentials: &'a Credentials,
    query: &'a str,
    list_field: &'a str,
    variables: Map<String, Value>,
    item: PhantomData<fn() -> T>,
}

impl<'a, T> GraphqlPages<'a, T> {
    #[must_use]
    pub fn new(
        client: &'a CatalogClient,
        credentials: &'a Credentials,
        query: &'a str,
        list_field: &'a str,
    ) -> Self {
        Self {
            client,
            credentials,
            query,
            list_field,
            variables: Map::new(),
            item: PhantomData,
        }
    }

    /// Adds the filter variables sent alongside `limit` and `offset`.
    #[must_use]
    pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = variables;
        self
    }

    fn page_variables(&self, offset: usize, limit: usize) -> Map<String, Value> {
        let mut variables = self.variables.clone();
        variables.insert("limit".to_string(), Value::from(limit));
        variables.insert("offset".to_string(), Value::from(offset));
        variables
    }
}

impl<T> PageSource for GraphqlPages<'_, T>
where
    T: DeserializeOwned + Send,
{
    type Item = T;

    async fn fetch_page(&self, offset: usize, limit: usize) -> CatalogResult<Page<T>> {
        let variables = self.page_variables(offset, limit);
        let mut data: Map<String, Value> = self
            .client
            .graphql(self.credentials, self.query, &variables)
            .await?;

        let items = match data.remove(self.list_field) {
            None | Some(Value::Null) => Vec::new(),
            Some(list) => serde_json::from_value(list)
                .map_err(|err| CatalogError::malformed(&self.credentials.endpoint, &err))?,
        };
        Ok(Page::new(items))
    }
}
