//! Common test utilities: in-memory repositories and travel fixtures

#![allow(dead_code)]

use anyhow::{bail, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use travel_service::contract::{
    Airline, AirlineSummary, Airport, DestinationAirport, Document, Geo, ListQuery, Page, Route,
    Schedule,
};
use travel_service::domain::repository::{CatalogRepository, DocumentRepository, GraphRepository};
use travel_service::domain::{Repositories, Service};

/// Documents that can be listed: country filter plus a sort key
pub trait Listed {
    fn country(&self) -> &str;
    fn sort_key(&self) -> &str;
}

impl Listed for Airline {
    fn country(&self) -> &str {
        &self.country
    }

    fn sort_key(&self) -> &str {
        &self.name
    }
}

impl Listed for Airport {
    fn country(&self) -> &str {
        &self.country
    }

    fn sort_key(&self) -> &str {
        &self.airportname
    }
}

/// One in-memory collection keyed by id
pub struct MockCollection<D> {
    data: RwLock<BTreeMap<i32, D>>,
    failing: Arc<AtomicBool>,
}

impl<D: Document> MockCollection<D> {
    fn new(failing: Arc<AtomicBool>) -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
            failing,
        }
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            bail!("connection refused");
        }
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.data.read().len()
    }

    pub fn all(&self) -> Vec<D> {
        self.data.read().values().cloned().collect()
    }
}

#[async_trait]
impl<D: Document> DocumentRepository<D> for MockCollection<D> {
    async fn find_by_id(&self, id: i32) -> Result<Option<D>> {
        self.check()?;
        Ok(self.data.read().get(&id).cloned())
    }

    async fn upsert(&self, document: &D) -> Result<D> {
        self.check()?;
        self.data.write().insert(document.id(), document.clone());
        Ok(document.clone())
    }

    async fn remove(&self, id: i32) -> Result<bool> {
        self.check()?;
        Ok(self.data.write().remove(&id).is_some())
    }
}

#[async_trait]
impl<D: Document + Listed> CatalogRepository<D> for MockCollection<D> {
    async fn list(&self, query: &ListQuery) -> Result<Vec<D>> {
        self.check()?;
        let mut items: Vec<D> = self
            .data
            .read()
            .values()
            .filter(|d| match &query.country {
                Some(country) => d.country().to_lowercase() == country.to_lowercase(),
                None => true,
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));

        Ok(window(items, query.page))
    }
}

/// Graph lookups evaluated over the airline and route collections
pub struct MockGraph {
    airlines: Arc<MockCollection<Airline>>,
    routes: Arc<MockCollection<Route>>,
    failing: Arc<AtomicBool>,
}

#[async_trait]
impl GraphRepository for MockGraph {
    async fn airlines_to_airport(
        &self,
        destination: &str,
        page: Page,
    ) -> Result<Vec<AirlineSummary>> {
        if self.failing.load(Ordering::SeqCst) {
            bail!("connection refused");
        }
        let destination = destination.to_lowercase();
        let served: BTreeSet<String> = self
            .routes
            .all()
            .into_iter()
            .filter(|r| r.destinationairport.to_lowercase() == destination)
            .map(|r| r.airlineid.replace("airline_", ""))
            .collect();

        let mut airlines: Vec<Airline> = self
            .airlines
            .all()
            .into_iter()
            .filter(|a| served.contains(&a.id.to_string()))
            .collect();
        airlines.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        let summaries = airlines
            .into_iter()
            .map(|a| AirlineSummary {
                callsign: a.callsign,
                country: a.country,
                iata: a.iata,
                icao: a.icao,
                name: a.name,
            })
            .collect();
        Ok(window(summaries, page))
    }

    async fn direct_connections(
        &self,
        source: &str,
        page: Page,
    ) -> Result<Vec<DestinationAirport>> {
        if self.failing.load(Ordering::SeqCst) {
            bail!("connection refused");
        }
        let source = source.to_lowercase();
        let destinations: BTreeSet<String> = self
            .routes
            .all()
            .into_iter()
            .filter(|r| r.sourceairport.to_lowercase() == source && r.stops == 0)
            .map(|r| r.destinationairport)
            .collect();

        let items = destinations
            .into_iter()
            .map(|destinationairport| DestinationAirport { destinationairport })
            .collect();
        Ok(window(items, page))
    }
}

// SQLite semantics: negative limit is unbounded, negative offset is zero.
fn window<T>(items: Vec<T>, page: Page) -> Vec<T> {
    let offset = usize::try_from(page.offset).unwrap_or(0);
    let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
    items.into_iter().skip(offset).take(limit).collect()
}

/// In-memory store backing every repository trait
pub struct MockStore {
    pub airlines: Arc<MockCollection<Airline>>,
    pub airports: Arc<MockCollection<Airport>>,
    pub routes: Arc<MockCollection<Route>>,
    failing: Arc<AtomicBool>,
}

impl MockStore {
    pub fn new() -> Self {
        let failing = Arc::new(AtomicBool::new(false));
        Self {
            airlines: Arc::new(MockCollection::new(failing.clone())),
            airports: Arc::new(MockCollection::new(failing.clone())),
            routes: Arc::new(MockCollection::new(failing.clone())),
            failing,
        }
    }

    /// Make every subsequent store call fail
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            airlines: self.airlines.clone(),
            airline_catalog: self.airlines.clone(),
            airports: self.airports.clone(),
            airport_catalog: self.airports.clone(),
            routes: self.routes.clone(),
            graph: Arc::new(MockGraph {
                airlines: self.airlines.clone(),
                routes: self.routes.clone(),
                failing: self.failing.clone(),
            }),
        }
    }

    pub fn service(&self) -> Arc<Service> {
        Arc::new(Service::new(self.repositories()))
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Fixtures =====

pub fn airline(id: i32, name: &str, country: &str) -> Airline {
    Airline {
        id,
        callsign: name.to_uppercase().replace(' ', ""),
        country: country.to_string(),
        iata: name.chars().take(2).collect::<String>().to_uppercase(),
        icao: name.chars().take(3).collect::<String>().to_uppercase(),
        name: name.to_string(),
    }
}

pub fn airport(id: i32, name: &str, faa: &str, country: &str) -> Airport {
    Airport {
        id,
        airportname: name.to_string(),
        city: name.to_string(),
        country: country.to_string(),
        faa: faa.to_string(),
        icao: format!("K{faa}"),
        tz: "America/New_York".to_string(),
        geo: Geo {
            alt: 13.0,
            lat: 40.6398,
            lon: -73.7789,
        },
    }
}

pub fn route(id: i32, airlineid: i32, source: &str, destination: &str, stops: i32) -> Route {
    Route {
        id,
        airline: "AF".to_string(),
        airlineid: airlineid.to_string(),
        sourceairport: source.to_string(),
        destinationairport: destination.to_string(),
        distance: 5837.0,
        equipment: "388".to_string(),
        stops,
        schedule: vec![Schedule {
            day: 1,
            utc: "10:15:00".to_string(),
            flight: "AF001".to_string(),
        }],
    }
}

/// Two airlines and four routes out of CDG, one of them with a stop
pub async fn seed_cdg(store: &MockStore) {
    store.airlines.upsert(&airline(1, "Air France", "France")).await.unwrap();
    store.airlines.upsert(&airline(2, "Delta Air Lines", "United States")).await.unwrap();

    store.routes.upsert(&route(100, 1, "CDG", "JFK", 0)).await.unwrap();
    store.routes.upsert(&route(101, 2, "CDG", "JFK", 0)).await.unwrap();
    store.routes.upsert(&route(102, 1, "CDG", "LHR", 0)).await.unwrap();
    store.routes.upsert(&route(103, 1, "CDG", "SFO", 1)).await.unwrap();
}
