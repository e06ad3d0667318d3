//! MCP tool modules.
//!
//! Tools are grouped by transport: REST list endpoints, the GraphQL asset
//! query, and contextual help.

pub mod graphql;
pub mod rest;
mod context;
