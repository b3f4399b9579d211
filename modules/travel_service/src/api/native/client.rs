//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    Airline, AirlineSummary, AirlineUpdate, Airport, AirportUpdate, DestinationAirport,
    ListQuery, Page, Route, RouteUpdate, TravelApi, TravelError,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl TravelApi for NativeClient {
    async fn list_airlines(&self, query: ListQuery) -> Result<Vec<Airline>, TravelError> {
        self.service.list_airlines(&query).await
    }

    async fn airlines_to_airport(
        &self,
        destination: &str,
        page: Page,
    ) -> Result<Vec<AirlineSummary>, TravelError> {
        self.service.airlines_to_airport(destination, page).await
    }

    async fn get_airline(&self, id: i32) -> Result<Airline, TravelError> {
        self.service.airlines().get_by_id(id).await
    }

    async fn create_airline(&self, airline: Airline) -> Result<Airline, TravelError> {
        self.service.airlines().create(airline).await
    }

    async fn update_airline(&self, id: i32, update: AirlineUpdate) -> Result<Airline, TravelError> {
        self.service.airlines().update_by_id(id, update).await
    }

    async fn delete_airline(&self, id: i32) -> Result<(), TravelError> {
        self.service.airlines().delete_by_id(id).await
    }

    async fn list_airports(&self, query: ListQuery) -> Result<Vec<Airport>, TravelError> {
        self.service.list_airports(&query).await
    }

    async fn direct_connections(
        &self,
        source: &str,
        page: Page,
    ) -> Result<Vec<DestinationAirport>, TravelError> {
        self.service.direct_connections(source, page).await
    }

    async fn get_airport(&self, id: i32) -> Result<Airport, TravelError> {
        self.service.airports().get_by_id(id).await
    }

    async fn create_airport(&self, airport: Airport) -> Result<Airport, TravelError> {
        self.service.airports().create(airport).await
    }

    async fn update_airport(&self, id: i32, update: AirportUpdate) -> Result<Airport, TravelError> {
        self.service.airports().update_by_id(id, update).await
    }

    async fn delete_airport(&self, id: i32) -> Result<(), TravelError> {
        self.service.airports().delete_by_id(id).await
    }

    async fn get_route(&self, id: i32) -> Result<Route, TravelError> {
        self.service.routes().get_by_id(id).await
    }

    async fn create_route(&self, route: Route) -> Result<Route, TravelError> {
        self.service.routes().create(route).await
    }

    async fn update_route(&self, id: i32, update: RouteUpdate) -> Result<Route, TravelError> {
        self.service.routes().update_by_id(id, update).await
    }

    async fn delete_route(&self, id: i32) -> Result<(), TravelError> {
        self.service.routes().delete_by_id(id).await
    }
}
