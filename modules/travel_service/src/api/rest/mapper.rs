//! Mapper implementations for converting between DTOs and contract models
//!
//! Create requests map 1:1 (including the caller's id) into documents,
//! update requests into the id-less update payloads.

use super::dto::*;
use crate::contract;

// ===== Airline conversions =====

impl From<contract::Airline> for AirlineDto {
    fn from(airline: contract::Airline) -> Self {
        Self {
            id: airline.id,
            callsign: airline.callsign,
            country: airline.country,
            iata: airline.iata,
            icao: airline.icao,
            name: airline.name,
        }
    }
}

impl From<AirlineDto> for contract::Airline {
    fn from(dto: AirlineDto) -> Self {
        Self {
            id: dto.id,
            callsign: dto.callsign,
            country: dto.country,
            iata: dto.iata,
            icao: dto.icao,
            name: dto.name,
        }
    }
}

impl From<UpdateAirlineRequest> for contract::AirlineUpdate {
    fn from(req: UpdateAirlineRequest) -> Self {
        Self {
            callsign: req.callsign,
            country: req.country,
            iata: req.iata,
            icao: req.icao,
            name: req.name,
        }
    }
}

impl From<contract::AirlineSummary> for AirlineSummaryDto {
    fn from(summary: contract::AirlineSummary) -> Self {
        Self {
            callsign: summary.callsign,
            country: summary.country,
            iata: summary.iata,
            icao: summary.icao,
            name: summary.name,
        }
    }
}

// ===== Airport conversions =====

impl From<contract::Geo> for GeoDto {
    fn from(geo: contract::Geo) -> Self {
        Self {
            alt: geo.alt,
            lat: geo.lat,
            lon: geo.lon,
        }
    }
}

impl From<GeoDto> for contract::Geo {
    fn from(dto: GeoDto) -> Self {
        Self {
            alt: dto.alt,
            lat: dto.lat,
            lon: dto.lon,
        }
    }
}

impl From<contract::Airport> for AirportDto {
    fn from(airport: contract::Airport) -> Self {
        Self {
            id: airport.id,
            airportname: airport.airportname,
            city: airport.city,
            country: airport.country,
            faa: airport.faa,
            icao: airport.icao,
            tz: airport.tz,
            geo: airport.geo.into(),
        }
    }
}

impl From<AirportDto> for contract::Airport {
    fn from(dto: AirportDto) -> Self {
        Self {
            id: dto.id,
            airportname: dto.airportname,
            city: dto.city,
            country: dto.country,
            faa: dto.faa,
            icao: dto.icao,
            tz: dto.tz,
            geo: dto.geo.into(),
        }
    }
}

impl From<UpdateAirportRequest> for contract::AirportUpdate {
    fn from(req: UpdateAirportRequest) -> Self {
        Self {
            airportname: req.airportname,
            city: req.city,
            country: req.country,
            faa: req.faa,
            icao: req.icao,
            tz: req.tz,
            geo: req.geo.into(),
        }
    }
}

impl From<contract::DestinationAirport> for DestinationAirportDto {
    fn from(destination: contract::DestinationAirport) -> Self {
        Self {
            destinationairport: destination.destinationairport,
        }
    }
}

// ===== Route conversions =====

impl From<contract::Schedule> for ScheduleDto {
    fn from(schedule: contract::Schedule) -> Self {
        Self {
            day: schedule.day,
            utc: schedule.utc,
            flight: schedule.flight,
        }
    }
}

impl From<ScheduleDto> for contract::Schedule {
    fn from(dto: ScheduleDto) -> Self {
        Self {
            day: dto.day,
            utc: dto.utc,
            flight: dto.flight,
        }
    }
}

impl From<contract::Route> for RouteDto {
    fn from(route: contract::Route) -> Self {
        Self {
            id: route.id,
            airline: route.airline,
            airlineid: route.airlineid,
            sourceairport: route.sourceairport,
            destinationairport: route.destinationairport,
            distance: route.distance,
            equipment: route.equipment,
            stops: route.stops,
            schedule: route.schedule.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<RouteDto> for contract::Route {
    fn from(dto: RouteDto) -> Self {
        Self {
            id: dto.id,
            airline: dto.airline,
            airlineid: dto.airlineid,
            sourceairport: dto.sourceairport,
            destinationairport: dto.destinationairport,
            distance: dto.distance,
            equipment: dto.equipment,
            stops: dto.stops,
            schedule: dto.schedule.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<UpdateRouteRequest> for contract::RouteUpdate {
    fn from(req: UpdateRouteRequest) -> Self {
        Self {
            airline: req.airline,
            airlineid: req.airlineid,
            sourceairport: req.sourceairport,
            destinationairport: req.destinationairport,
            distance: req.distance,
            equipment: req.equipment,
            stops: req.stops,
            schedule: req.schedule.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_string_fields_default_to_empty() {
        let dto: AirlineDto = serde_json::from_str(r#"{"id": 10, "name": "Test Air"}"#).unwrap();
        let airline: contract::Airline = dto.into();

        assert_eq!(airline.id, 10);
        assert_eq!(airline.name, "Test Air");
        assert_eq!(airline.callsign, "");
        assert_eq!(airline.country, "");
    }

    #[test]
    fn route_json_uses_document_field_names() {
        let dto: RouteDto = serde_json::from_value(serde_json::json!({
            "id": 10000,
            "airline": "AF",
            "airlineid": "137",
            "sourceairport": "TLV",
            "destinationairport": "MRS",
            "stops": 0,
            "equipment": "320",
            "schedule": [{"day": 0, "utc": "10:13:00", "flight": "AF198"}],
            "distance": 2881.617376098415
        }))
        .unwrap();

        let route: contract::Route = dto.into();
        assert_eq!(route.schedule.len(), 1);
        assert_eq!(route.schedule[0].flight, "AF198");

        let json = serde_json::to_value(RouteDto::from(route)).unwrap();
        assert_eq!(json["destinationairport"], "MRS");
        assert_eq!(json["schedule"][0]["utc"], "10:13:00");
    }
}
