//! Travel Service Module
//!
//! Airline, airport and route documents over SeaORM, with filtered paging
//! and two store-evaluated graph lookups: airlines serving an airport and
//! direct (non-stop) connections from an airport.

// Public exports
pub mod contract;
pub use contract::{
    client::TravelApi, error::TravelError, Airline, AirlineSummary, AirlineUpdate, Airport,
    AirportUpdate, DestinationAirport, Geo, ListQuery, Page, Route, RouteUpdate, Schedule,
};

pub mod module;
pub use module::TravelServiceModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
