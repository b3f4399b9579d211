//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{airline, airport, route};
use crate::contract::{Airline, Airport, Geo, Route, Schedule};
use sea_orm::ActiveValue::Set;
use serde::Deserialize;
use serde_json::{json, Value};

// ===== Airline Conversions =====

impl From<airline::Model> for Airline {
    fn from(entity: airline::Model) -> Self {
        Self {
            id: entity.id,
            callsign: entity.callsign,
            country: entity.country,
            iata: entity.iata,
            icao: entity.icao,
            name: entity.name,
        }
    }
}

impl From<&Airline> for airline::ActiveModel {
    fn from(model: &Airline) -> Self {
        Self {
            id: Set(model.id),
            callsign: Set(model.callsign.clone()),
            country: Set(model.country.clone()),
            iata: Set(model.iata.clone()),
            icao: Set(model.icao.clone()),
            name: Set(model.name.clone()),
        }
    }
}

// ===== Airport Conversions =====

impl TryFrom<airport::Model> for Airport {
    type Error = anyhow::Error;

    fn try_from(entity: airport::Model) -> Result<Self, Self::Error> {
        let geo: GeoJson = serde_json::from_value(entity.geo)?;

        Ok(Self {
            id: entity.id,
            airportname: entity.airportname,
            city: entity.city,
            country: entity.country,
            faa: entity.faa,
            icao: entity.icao,
            tz: entity.tz,
            geo: geo.into(),
        })
    }
}

impl From<&Airport> for airport::ActiveModel {
    fn from(model: &Airport) -> Self {
        Self {
            id: Set(model.id),
            airportname: Set(model.airportname.clone()),
            city: Set(model.city.clone()),
            country: Set(model.country.clone()),
            faa: Set(model.faa.clone()),
            icao: Set(model.icao.clone()),
            tz: Set(model.tz.clone()),
            geo: Set(geo_to_json(&model.geo)),
        }
    }
}

// ===== Route Conversions =====

impl TryFrom<route::Model> for Route {
    type Error = anyhow::Error;

    fn try_from(entity: route::Model) -> Result<Self, Self::Error> {
        let schedule: Vec<ScheduleJson> = match entity.schedule {
            Value::Null => Vec::new(),
            value => serde_json::from_value(value)?,
        };

        Ok(Self {
            id: entity.id,
            airline: entity.airline,
            airlineid: entity.airlineid,
            sourceairport: entity.sourceairport,
            destinationairport: entity.destinationairport,
            distance: entity.distance,
            equipment: entity.equipment,
            stops: entity.stops,
            schedule: schedule.into_iter().map(Into::into).collect(),
        })
    }
}

impl From<&Route> for route::ActiveModel {
    fn from(model: &Route) -> Self {
        Self {
            id: Set(model.id),
            airline: Set(model.airline.clone()),
            airlineid: Set(model.airlineid.clone()),
            sourceairport: Set(model.sourceairport.clone()),
            destinationairport: Set(model.destinationairport.clone()),
            distance: Set(model.distance),
            equipment: Set(model.equipment.clone()),
            stops: Set(model.stops),
            schedule: Set(schedule_to_json(&model.schedule)),
        }
    }
}

// ===== JSON Serialization Helpers =====

/// JSON representation of the embedded geo object
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct GeoJson {
    alt: f64,
    lat: f64,
    lon: f64,
}

/// JSON representation of one schedule entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ScheduleJson {
    day: i32,
    utc: String,
    flight: String,
}

impl From<GeoJson> for Geo {
    fn from(json: GeoJson) -> Self {
        Self {
            alt: json.alt,
            lat: json.lat,
            lon: json.lon,
        }
    }
}

impl From<ScheduleJson> for Schedule {
    fn from(json: ScheduleJson) -> Self {
        Self {
            day: json.day,
            utc: json.utc,
            flight: json.flight,
        }
    }
}

fn geo_to_json(geo: &Geo) -> Value {
    json!({
        "alt": geo.alt,
        "lat": geo.lat,
        "lon": geo.lon,
    })
}

fn schedule_to_json(schedule: &[Schedule]) -> Value {
    Value::Array(
        schedule
            .iter()
            .map(|entry| {
                json!({
                    "day": entry.day,
                    "utc": entry.utc,
                    "flight": entry.flight,
                })
            })
            .collect(),
    )
}
