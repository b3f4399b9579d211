//! Contract models for travel service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

/// A persisted document addressed by a caller-supplied integer id.
pub trait Document: Clone + Send + Sync + 'static {
    /// Resource name used in not-found signals and REST locations
    const RESOURCE: &'static str;

    /// Document key
    fn id(&self) -> i32;
}

/// Full-field replacement of an existing document.
///
/// Implementations overwrite every mutable field of the target and leave the
/// id untouched. There is no partial update.
pub trait DocumentUpdate<D: Document>: Send {
    fn apply_to(self, target: &mut D);
}

/// Airline document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Airline {
    pub id: i32,
    pub callsign: String,
    pub country: String,
    pub iata: String,
    pub icao: String,
    pub name: String,
}

/// Airline fields without the key, used by updates
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AirlineUpdate {
    pub callsign: String,
    pub country: String,
    pub iata: String,
    pub icao: String,
    pub name: String,
}

/// Airline projection returned by the airlines-to-airport lookup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AirlineSummary {
    pub callsign: String,
    pub country: String,
    pub iata: String,
    pub icao: String,
    pub name: String,
}

/// Geographic position of an airport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geo {
    /// Altitude in feet
    pub alt: f64,
    pub lat: f64,
    pub lon: f64,
}

/// Airport document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Airport {
    pub id: i32,
    pub airportname: String,
    pub city: String,
    pub country: String,
    /// FAA location identifier, the code routes refer to
    pub faa: String,
    pub icao: String,
    /// IANA timezone name (e.g. "Europe/Paris")
    pub tz: String,
    pub geo: Geo,
}

/// Airport fields without the key, used by updates
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AirportUpdate {
    pub airportname: String,
    pub city: String,
    pub country: String,
    pub faa: String,
    pub icao: String,
    pub tz: String,
    pub geo: Geo,
}

/// Single scheduled departure of a route.
///
/// Carried as opaque payload with the route, never queried.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schedule {
    /// Day of week, 0 = Sunday
    pub day: i32,
    /// Departure time (UTC), "HH:MM:SS"
    pub utc: String,
    pub flight: String,
}

/// Route document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    pub id: i32,
    /// Operating airline code
    pub airline: String,
    /// Operating airline's id, bare ("137") or document key ("airline_137").
    /// Not enforced.
    pub airlineid: String,
    pub sourceairport: String,
    pub destinationairport: String,
    pub distance: f64,
    pub equipment: String,
    pub stops: i32,
    pub schedule: Vec<Schedule>,
}

/// Route fields without the key, used by updates
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteUpdate {
    pub airline: String,
    pub airlineid: String,
    pub sourceairport: String,
    pub destinationairport: String,
    pub distance: f64,
    pub equipment: String,
    pub stops: i32,
    pub schedule: Vec<Schedule>,
}

/// Destination code reachable from an airport (projection only)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DestinationAirport {
    pub destinationairport: String,
}

/// Offset/limit window
///
/// Values are not validated. Negative numbers reach the store as given and
/// the backend decides what they mean (SQLite: no limit / zero offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    pub const DEFAULT_LIMIT: i64 = 10;
    pub const DEFAULT_OFFSET: i64 = 0;

    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: Self::DEFAULT_OFFSET,
        }
    }
}

/// Filtered, ordered and paged listing of a collection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    /// Case-insensitive equality filter on the country field
    pub country: Option<String>,
    pub page: Page,
}

impl ListQuery {
    pub fn new(country: Option<String>, page: Page) -> Self {
        // an empty filter means "no filter"
        let country = country.filter(|c| !c.is_empty());
        Self { country, page }
    }
}

// ===== Document impls =====

impl Document for Airline {
    const RESOURCE: &'static str = "airline";

    fn id(&self) -> i32 {
        self.id
    }
}

impl Document for Airport {
    const RESOURCE: &'static str = "airport";

    fn id(&self) -> i32 {
        self.id
    }
}

impl Document for Route {
    const RESOURCE: &'static str = "route";

    fn id(&self) -> i32 {
        self.id
    }
}

impl DocumentUpdate<Airline> for AirlineUpdate {
    fn apply_to(self, target: &mut Airline) {
        target.callsign = self.callsign;
        target.country = self.country;
        target.iata = self.iata;
        target.icao = self.icao;
        target.name = self.name;
    }
}

impl DocumentUpdate<Airport> for AirportUpdate {
    fn apply_to(self, target: &mut Airport) {
        target.airportname = self.airportname;
        target.city = self.city;
        target.country = self.country;
        target.faa = self.faa;
        target.icao = self.icao;
        target.tz = self.tz;
        target.geo = self.geo;
    }
}

impl DocumentUpdate<Route> for RouteUpdate {
    fn apply_to(self, target: &mut Route) {
        target.airline = self.airline;
        target.airlineid = self.airlineid;
        target.sourceairport = self.sourceairport;
        target.destinationairport = self.destinationairport;
        target.distance = self.distance;
        target.equipment = self.equipment;
        target.stops = self.stops;
        target.schedule = self.schedule;
    }
}
