//! Catalog operations exposed to the MCP tools.
//!
//! Each operation builds its page source from the caller's credentials and
//! filters, then runs it through the shared pagination driver.

mod graphql;
mod rest;

use crate::client::CatalogClient;

#[derive(Debug, Clone, Default)]
pub struct CatalogControl {
    client: CatalogClient,
}

impl CatalogControl {
    #[must_use]
    pub const fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub const fn client(&self) -> &CatalogClient {
        &self.client
    }
}
