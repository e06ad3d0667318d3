use tracing::info;

use super::CatalogControl;
use crate::credentials::Credentials;
use crate::error::CatalogResult;
use crate::models::Asset;
use crate::paginate::{Collected, GraphqlPages, PageOptions, collect_pages};
use crate::queries::{ASSETS_BY_TYPE_QUERY, ASSETS_FIELD, assets_by_type_variables};

impl CatalogControl {
    /// Fetches every asset whose type is named `type_name`.
    ///
    /// # Errors
    /// Returns the first `CatalogError` raised by any page request, including
    /// GraphQL `errors` and responses without `data`.
    pub async fn assets_by_type(
        &self,
        credentials: &Credentials,
        type_name: &str,
        options: PageOptions,
    ) -> CatalogResult<Collected<Asset>> {
        let pages = GraphqlPages::new(
            &self.client,
            credentials,
            ASSETS_BY_TYPE_QUERY,
            ASSETS_FIELD,
        )
        .with_variables(assets_by_type_variables(type_name));
        let collected = collect_pages(&pages, options).await?;
        info!(type_name, returned = collected.results.len(), "listed assets by type");
        Ok(collected)
    }
}
