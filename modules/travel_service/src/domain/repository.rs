//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{AirlineSummary, DestinationAirport, Document, ListQuery, Page};
use anyhow::Result;
use async_trait::async_trait;

/// Single-document access to one collection, keyed by integer id
#[async_trait]
pub trait DocumentRepository<D: Document>: Send + Sync {
    /// Find a document by id
    async fn find_by_id(&self, id: i32) -> Result<Option<D>>;

    /// Insert the document, or replace the stored one with the same id
    async fn upsert(&self, document: &D) -> Result<D>;

    /// Remove a document by id, returning whether it existed
    async fn remove(&self, id: i32) -> Result<bool>;
}

/// Filtered, ordered and paged listing of a collection
#[async_trait]
pub trait CatalogRepository<D: Document>: Send + Sync {
    /// Ascending on the collection's sort field, `country` compared case-insensitively
    async fn list(&self, query: &ListQuery) -> Result<Vec<D>>;
}

/// Fixed traversal queries evaluated by the store
#[async_trait]
pub trait GraphRepository: Send + Sync {
    /// Distinct airlines with a route into `destination` (case-insensitive code)
    async fn airlines_to_airport(&self, destination: &str, page: Page)
        -> Result<Vec<AirlineSummary>>;

    /// Distinct zero-stop destinations from `source`, ascending by code
    async fn direct_connections(&self, source: &str, page: Page)
        -> Result<Vec<DestinationAirport>>;
}
