//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with travel service.
//! NO HTTP - direct function calls for performance.

use super::error::TravelError;
use super::model::{
    Airline, AirlineSummary, AirlineUpdate, Airport, AirportUpdate, DestinationAirport,
    ListQuery, Page, Route, RouteUpdate,
};
use async_trait::async_trait;

/// Travel service API for inter-module communication
#[async_trait]
pub trait TravelApi: Send + Sync {
    // ===== Airline Operations =====

    /// List airlines ordered by name
    async fn list_airlines(&self, query: ListQuery) -> Result<Vec<Airline>, TravelError>;

    /// Airlines operating at least one route into the destination airport
    async fn airlines_to_airport(
        &self,
        destination: &str,
        page: Page,
    ) -> Result<Vec<AirlineSummary>, TravelError>;

    async fn get_airline(&self, id: i32) -> Result<Airline, TravelError>;

    async fn create_airline(&self, airline: Airline) -> Result<Airline, TravelError>;

    async fn update_airline(&self, id: i32, update: AirlineUpdate) -> Result<Airline, TravelError>;

    async fn delete_airline(&self, id: i32) -> Result<(), TravelError>;

    // ===== Airport Operations =====

    /// List airports ordered by airport name
    async fn list_airports(&self, query: ListQuery) -> Result<Vec<Airport>, TravelError>;

    /// Destinations reachable without stops from the source airport
    async fn direct_connections(
        &self,
        source: &str,
        page: Page,
    ) -> Result<Vec<DestinationAirport>, TravelError>;

    async fn get_airport(&self, id: i32) -> Result<Airport, TravelError>;

    async fn create_airport(&self, airport: Airport) -> Result<Airport, TravelError>;

    async fn update_airport(&self, id: i32, update: AirportUpdate) -> Result<Airport, TravelError>;

    async fn delete_airport(&self, id: i32) -> Result<(), TravelError>;

    // ===== Route Operations =====

    async fn get_route(&self, id: i32) -> Result<Route, TravelError>;

    async fn create_route(&self, route: Route) -> Result<Route, TravelError>;

    async fn update_route(&self, id: i32, update: RouteUpdate) -> Result<Route, TravelError>;

    async fn delete_route(&self, id: i32) -> Result<(), TravelError>;
}
