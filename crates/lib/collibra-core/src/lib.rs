//! Core client and pagination engine for collibra-mcp.
//!
//! This crate owns the authenticated REST and GraphQL request executors, the
//! generic offset/limit pagination driver, and the catalog operations built
//! on top of them.

pub mod client;
pub mod control;
pub mod credentials;
pub mod error;
pub mod models;
pub mod paginate;
pub mod queries;

pub use client::CatalogClient;
pub use control::CatalogControl;
pub use credentials::Credentials;
pub use error::{CatalogError, CatalogResult};
