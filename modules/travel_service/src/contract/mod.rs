//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::TravelApi;
pub use error::TravelError;
pub use model::{
    Airline, AirlineSummary, AirlineUpdate, Airport, AirportUpdate, DestinationAirport,
    Document, DocumentUpdate, Geo, ListQuery, Page, Route, RouteUpdate, Schedule,
};
