use tracing::info;

use super::CatalogControl;
use crate::credentials::Credentials;
use crate::error::CatalogResult;
use crate::models::{AssetType, Community};
use crate::paginate::{Collected, PageOptions, RestPages, collect_pages};
use crate::queries::{AssetTypeQuery, CommunityQuery};

impl CatalogControl {
    /// Lists asset types matching `query`, following pagination to the end.
    ///
    /// # Errors
    /// Returns the first `CatalogError` raised by any page request.
    pub async fn list_asset_types(
        &self,
        credentials: &Credentials,
        query: &AssetTypeQuery,
        options: PageOptions,
    ) -> CatalogResult<Collected<AssetType>> {
        let pages = RestPages::new(&self.client, credentials, |offset, limit| {
            query.path(offset, limit)
        });
        let collected = collect_pages(&pages, options).await?;
        info!(
            returned = collected.results.len(),
            total = collected.total,
            "listed asset types"
        );
        Ok(collected)
    }

    /// Lists communities matching `query`, following pagination to the end.
    ///
    /// # Errors
    /// Returns the first `CatalogError` raised by any page request.
    pub async fn list_communities(
        &self,
        credentials: &Credentials,
        query: &CommunityQuery,
        options: PageOptions,
    ) -> CatalogResult<Collected<Community>> {
        let pages = RestPages::new(&self.client, credentials, |offset, limit| {
            query.path(offset, limit)
        });
        let collected = collect_pages(&pages, options).await?;
        info!(
            returned = collected.results.len(),
            total = collected.total,
            "listed communities"
        );
        Ok(collected)
    }
}
