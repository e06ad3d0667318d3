use std::marker::PhantomData;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::{Page, PageSource};
use crate::client::CatalogClient;
use crate::credentials::Credentials;
use crate::error::CatalogResult;

/// Envelope returned by Collibra REST list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct RestPage<T> {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    pub results: Vec<T>,
}

/// Pages of a REST list endpoint, addressed by a caller-built path.
///
/// `make_path(offset, limit)` returns the path and query string for one page;
/// it carries every filter and is never inspected here.
pub struct RestPages<'a, T, F> {
    client: &'a CatalogClient,
    credentials: &'a Credentials,
    make_path: F,
    item: PhantomData<fn() -> T>,
}

impl<'a, T, F> RestPages<'a, T, F>
where
    F: Fn(usize, usize) -> String,
{
    pub const fn new(client: &'a CatalogClient, credentials: &'a Credentials, make_path: F) -> Self {
        Self {
            client,
            credentials,
            make_path,
            item: PhantomData,
        }
    }
}

impl<T, F> PageSource for RestPages<'_, T, F>
where
    T: DeserializeOwned + Send,
    F: Fn(usize, usize) -> String + Sync,
{
    type Item = T;

    async fn fetch_page(&self, offset: usize, limit: usize) -> CatalogResult<Page<T>> {
        let path = (self.make_path)(offset, limit);
        let page: RestPage<T> = self.client.get_json(self.credentials, &path).await?;
        Ok(Page::new(page.results).with_total(page.total))
    }
}
