//! Generic offset/limit pagination.
//!
//! [`collect_pages`] drives any [`PageSource`] from offset zero until the
//! source reports a short page or the accumulated results reach the optional
//! `max_results` cap. Pages are requested strictly one after another.

mod graphql;
mod rest;

use std::future::Future;

use tracing::debug;

use crate::error::CatalogResult;

pub use graphql::GraphqlPages;
pub use rest::{RestPage, RestPages};

/// Largest page size the REST API accepts.
pub const REST_MAX_PAGE_SIZE: usize = 1000;
/// Largest page size the GraphQL tool accepts.
pub const GRAPHQL_MAX_LIMIT: usize = 100;

/// One bounded response from a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Collection size reported by the server, when the transport has one.
    pub total: Option<u64>,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self { items, total: None }
    }

    #[must_use]
    pub fn with_total(mut self, total: Option<u64>) -> Self {
        self.total = total;
        self
    }
}

/// Capability set a transport provides to the pagination driver.
pub trait PageSource {
    type Item;

    /// Requests the page starting at `offset` holding at most `limit` items.
    fn fetch_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> impl Future<Output = CatalogResult<Page<Self::Item>>> + Send;

    /// End of collection is signalled by a page shorter than requested.
    fn is_last_page(&self, page: &Page<Self::Item>, limit: usize) -> bool {
        page.items.len() < limit
    }
}

/// Page size and optional upper bound on accumulated items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    page_size: usize,
    max_results: Option<usize>,
}

impl PageOptions {
    /// A page size of zero is raised to one.
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            page_size: if page_size == 0 { 1 } else { page_size },
            max_results: None,
        }
    }

    /// REST options: `page_size` defaults to and is clamped at 1000.
    #[must_use]
    pub fn rest(page_size: Option<usize>, max_results: Option<usize>) -> Self {
        Self::new(page_size.unwrap_or(REST_MAX_PAGE_SIZE))
            .clamp_page_size(REST_MAX_PAGE_SIZE)
            .with_max_results(max_results)
    }

    #[must_use]
    pub const fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }

    #[must_use]
    pub fn clamp_page_size(mut self, max: usize) -> Self {
        self.page_size = self.page_size.min(max.max(1));
        self
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn max_results(&self) -> Option<usize> {
        self.max_results
    }

    fn wants_more(&self, collected: usize) -> bool {
        self.max_results.is_none_or(|max| collected < max)
    }
}

/// Everything fetched by one paginated call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected<T> {
    /// Last total reported by the server, if any page carried one.
    pub total: Option<u64>,
    pub results: Vec<T>,
}

/// Fetches pages from `source` until the collection is exhausted or
/// `max_results` items have been accumulated.
///
/// The cap is checked between pages, so the final page may overshoot it;
/// the surplus is dropped before returning.
///
/// # Errors
/// Returns the first error raised by `source`; items from earlier pages are
/// discarded.
pub async fn collect_pages<S: PageSource>(
    source: &S,
    options: PageOptions,
) -> CatalogResult<Collected<S::Item>> {
    let page_size = options.page_size();
    let mut offset = 0;
    let mut total = None;
    let mut results = Vec::new();

    while options.wants_more(results.len()) {
        let page = source.fetch_page(offset, page_size).await?;
        let last = source.is_last_page(&page, page_size);
        debug!(offset, page_size, returned = page.items.len(), "fetched page");

        if page.total.is_some() {
            total = page.total;
        }
        results.extend(page.items);

        if last {
            break;
        }
        offset += page_size;
    }

    if let Some(max) = options.max_results() {
        results.truncate(max);
    }
    Ok(Collected { total, results })
}
