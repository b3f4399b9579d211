//! Module declaration and lifecycle implementation

use crate::config::Config;
use crate::contract::TravelApi;
use crate::domain::{Repositories, Service};
use crate::infra::storage::repositories::{
    SeaOrmAirlineRepository, SeaOrmAirportRepository, SeaOrmGraphRepository,
    SeaOrmRouteRepository,
};
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Travel service module
///
/// Lifecycle: `migrate` the schema, `init` with a connection, then
/// `register_rest` and/or hand out the native `client`.
pub struct TravelServiceModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for TravelServiceModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            service: RwLock::new(None),
        }
    }
}

impl TravelServiceModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire repositories and the domain service on top of a shared connection
    pub async fn init(&self, cfg: Config, db: Arc<DatabaseConnection>) -> Result<()> {
        *self.config.write() = cfg;

        // Build repositories
        let airlines = Arc::new(SeaOrmAirlineRepository::new(db.clone()));
        let airports = Arc::new(SeaOrmAirportRepository::new(db.clone()));
        let routes = Arc::new(SeaOrmRouteRepository::new(db.clone()));
        let graph = Arc::new(SeaOrmGraphRepository::new(db));

        // Build domain service
        let service = Arc::new(Service::new(Repositories {
            airlines: airlines.clone(),
            airline_catalog: airlines,
            airports: airports.clone(),
            airport_catalog: airports,
            routes,
            graph,
        }));
        *self.service.write() = Some(service);

        tracing::info!("Travel service initialized");
        Ok(())
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Travel service migrations completed");
        Ok(())
    }

    /// Mount the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;
        let config = self.config.read().clone();

        tracing::info!(base_path = %config.base_path, "Registering travel service REST routes");
        crate::api::rest::routes::register_routes(router, service, &config)
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn TravelApi>> {
        let service = self.service()?;
        Ok(Arc::new(crate::api::native::NativeClient::new(service)))
    }

    fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }
}
