//! REST DTOs with serde derives for HTTP API
//!
//! Field names follow the travel-sample document shape. Missing string
//! fields deserialize to "" and are never null.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Airline DTOs =====

/// Airline document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AirlineDto {
    #[schema(example = 10)]
    pub id: i32,

    #[serde(default)]
    #[schema(example = "MILE-AIR")]
    pub callsign: String,

    #[serde(default)]
    #[schema(example = "United States")]
    pub country: String,

    #[serde(default)]
    #[schema(example = "Q5")]
    pub iata: String,

    #[serde(default)]
    #[schema(example = "MLA")]
    pub icao: String,

    #[serde(default)]
    #[schema(example = "40-Mile Air")]
    pub name: String,
}

/// Airline create request, the id is chosen by the caller
pub type CreateAirlineRequest = AirlineDto;

/// Airline update request; every field is replaced
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAirlineRequest {
    #[serde(default)]
    pub callsign: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub iata: String,
    #[serde(default)]
    pub icao: String,
    #[serde(default)]
    pub name: String,
}

/// Airline projection served by the to-airport lookup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AirlineSummaryDto {
    pub callsign: String,
    pub country: String,
    pub iata: String,
    pub icao: String,
    pub name: String,
}

// ===== Airport DTOs =====

/// Airport coordinates
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema)]
pub struct GeoDto {
    #[serde(default)]
    #[schema(example = 12.0)]
    pub alt: f64,

    #[serde(default)]
    #[schema(example = 50.962097)]
    pub lat: f64,

    #[serde(default)]
    #[schema(example = 1.954764)]
    pub lon: f64,
}

/// Airport document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AirportDto {
    #[schema(example = 1254)]
    pub id: i32,

    #[serde(default)]
    #[schema(example = "Calais Dunkerque")]
    pub airportname: String,

    #[serde(default)]
    #[schema(example = "Calais")]
    pub city: String,

    #[serde(default)]
    #[schema(example = "France")]
    pub country: String,

    #[serde(default)]
    #[schema(example = "CQF")]
    pub faa: String,

    #[serde(default)]
    #[schema(example = "LFAC")]
    pub icao: String,

    #[serde(default)]
    #[schema(example = "Europe/Paris")]
    pub tz: String,

    #[serde(default)]
    pub geo: GeoDto,
}

/// Airport create request, the id is chosen by the caller
pub type CreateAirportRequest = AirportDto;

/// Airport update request; every field is replaced
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAirportRequest {
    #[serde(default)]
    pub airportname: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub faa: String,
    #[serde(default)]
    pub icao: String,
    #[serde(default)]
    pub tz: String,
    #[serde(default)]
    pub geo: GeoDto,
}

/// Destination code of a direct connection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DestinationAirportDto {
    #[schema(example = "JFK")]
    pub destinationairport: String,
}

// ===== Route DTOs =====

/// Scheduled flight of a route
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ScheduleDto {
    #[serde(default)]
    #[schema(example = 0)]
    pub day: i32,

    #[serde(default)]
    #[schema(example = "10:13:00")]
    pub utc: String,

    #[serde(default)]
    #[schema(example = "AF198")]
    pub flight: String,
}

/// Route document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RouteDto {
    #[schema(example = 10000)]
    pub id: i32,

    #[serde(default)]
    #[schema(example = "AF")]
    pub airline: String,

    #[serde(default)]
    #[schema(example = "137")]
    pub airlineid: String,

    #[serde(default)]
    #[schema(example = "TLV")]
    pub sourceairport: String,

    #[serde(default)]
    #[schema(example = "MRS")]
    pub destinationairport: String,

    #[serde(default)]
    #[schema(example = 2881.617376098415)]
    pub distance: f64,

    #[serde(default)]
    #[schema(example = "320")]
    pub equipment: String,

    #[serde(default)]
    #[schema(example = 0)]
    pub stops: i32,

    #[serde(default)]
    pub schedule: Vec<ScheduleDto>,
}

/// Route create request, the id is chosen by the caller
pub type CreateRouteRequest = RouteDto;

/// Route update request; every field is replaced
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateRouteRequest {
    #[serde(default)]
    pub airline: String,
    #[serde(default)]
    pub airlineid: String,
    #[serde(default)]
    pub sourceairport: String,
    #[serde(default)]
    pub destinationairport: String,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub stops: i32,
    #[serde(default)]
    pub schedule: Vec<ScheduleDto>,
}

// Note: Conversion implementations live in mapper.rs
