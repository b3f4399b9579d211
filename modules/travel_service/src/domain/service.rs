//! Domain service - business logic orchestration

use super::repository::{CatalogRepository, DocumentRepository, GraphRepository};
use crate::contract::{
    Airline, AirlineSummary, Airport, DestinationAirport, Document, DocumentUpdate, ListQuery,
    Page, Route, TravelError,
};
use std::sync::Arc;

/// Get/create/update/delete for one document collection.
///
/// Each operation is an independent single-document read-modify-write with
/// no locking; concurrent writers are last-writer-wins in the store.
pub struct CrudService<D: Document> {
    repo: Arc<dyn DocumentRepository<D>>,
}

impl<D: Document> Clone for CrudService<D> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<D: Document> CrudService<D> {
    pub fn new(repo: Arc<dyn DocumentRepository<D>>) -> Self {
        Self { repo }
    }

    /// Get a document by id
    pub async fn get_by_id(&self, id: i32) -> Result<D, TravelError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(TravelError::store)?
            .ok_or_else(|| TravelError::not_found(D::RESOURCE, id))
    }

    /// Persist a new document with its caller-supplied id
    pub async fn create(&self, document: D) -> Result<D, TravelError> {
        let created = self
            .repo
            .upsert(&document)
            .await
            .map_err(TravelError::store)?;

        tracing::debug!(resource = D::RESOURCE, id = created.id(), "document created");
        Ok(created)
    }

    /// Replace every mutable field of an existing document
    pub async fn update_by_id<U>(&self, id: i32, update: U) -> Result<D, TravelError>
    where
        U: DocumentUpdate<D>,
    {
        let mut document = self.get_by_id(id).await?;
        update.apply_to(&mut document);

        let updated = self
            .repo
            .upsert(&document)
            .await
            .map_err(TravelError::store)?;

        tracing::debug!(resource = D::RESOURCE, id, "document updated");
        Ok(updated)
    }

    /// Delete a document by id
    pub async fn delete_by_id(&self, id: i32) -> Result<(), TravelError> {
        // existence check first so a missing id never reaches remove
        self.get_by_id(id).await?;

        let removed = self.repo.remove(id).await.map_err(TravelError::store)?;
        if !removed {
            // deleted concurrently between the lookup and the remove
            return Err(TravelError::not_found(D::RESOURCE, id));
        }

        tracing::debug!(resource = D::RESOURCE, id, "document deleted");
        Ok(())
    }
}

/// Repositories backing the domain service
#[derive(Clone)]
pub struct Repositories {
    pub airlines: Arc<dyn DocumentRepository<Airline>>,
    pub airline_catalog: Arc<dyn CatalogRepository<Airline>>,
    pub airports: Arc<dyn DocumentRepository<Airport>>,
    pub airport_catalog: Arc<dyn CatalogRepository<Airport>>,
    pub routes: Arc<dyn DocumentRepository<Route>>,
    pub graph: Arc<dyn GraphRepository>,
}

/// Domain service for the travel collections
pub struct Service {
    airlines: CrudService<Airline>,
    airports: CrudService<Airport>,
    routes: CrudService<Route>,
    airline_catalog: Arc<dyn CatalogRepository<Airline>>,
    airport_catalog: Arc<dyn CatalogRepository<Airport>>,
    graph: Arc<dyn GraphRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(repos: Repositories) -> Self {
        Self {
            airlines: CrudService::new(repos.airlines),
            airports: CrudService::new(repos.airports),
            routes: CrudService::new(repos.routes),
            airline_catalog: repos.airline_catalog,
            airport_catalog: repos.airport_catalog,
            graph: repos.graph,
        }
    }

    pub fn airlines(&self) -> &CrudService<Airline> {
        &self.airlines
    }

    pub fn airports(&self) -> &CrudService<Airport> {
        &self.airports
    }

    pub fn routes(&self) -> &CrudService<Route> {
        &self.routes
    }

    // ===== Listings =====

    /// List airlines ordered by name; no rows is NotFound
    pub async fn list_airlines(&self, query: &ListQuery) -> Result<Vec<Airline>, TravelError> {
        let items = self
            .airline_catalog
            .list(query)
            .await
            .map_err(TravelError::store)?;
        non_empty(items, Airline::RESOURCE, describe_list(query))
    }

    /// List airports ordered by airport name; no rows is NotFound
    pub async fn list_airports(&self, query: &ListQuery) -> Result<Vec<Airport>, TravelError> {
        let items = self
            .airport_catalog
            .list(query)
            .await
            .map_err(TravelError::store)?;
        non_empty(items, Airport::RESOURCE, describe_list(query))
    }

    // ===== Graph lookups =====

    /// Airlines serving the destination airport
    pub async fn airlines_to_airport(
        &self,
        destination: &str,
        page: Page,
    ) -> Result<Vec<AirlineSummary>, TravelError> {
        let items = self
            .graph
            .airlines_to_airport(destination, page)
            .await
            .map_err(TravelError::store)?;

        tracing::debug!(destination, count = items.len(), "airlines to airport");
        non_empty(items, Airline::RESOURCE, format!("serving {destination}"))
    }

    /// Airports reachable from the source airport without stops
    pub async fn direct_connections(
        &self,
        source: &str,
        page: Page,
    ) -> Result<Vec<DestinationAirport>, TravelError> {
        let items = self
            .graph
            .direct_connections(source, page)
            .await
            .map_err(TravelError::store)?;

        tracing::debug!(source, count = items.len(), "direct connections");
        non_empty(items, "direct connection", format!("from {source}"))
    }
}

// Filter matched nothing and collection empty both collapse to NotFound.
fn non_empty<T>(items: Vec<T>, resource: &str, id: String) -> Result<Vec<T>, TravelError> {
    if items.is_empty() {
        return Err(TravelError::not_found(resource, id));
    }
    Ok(items)
}

fn describe_list(query: &ListQuery) -> String {
    format!(
        "country={} limit={} offset={}",
        query.country.as_deref().unwrap_or("*"),
        query.page.limit,
        query.page.offset
    )
}
