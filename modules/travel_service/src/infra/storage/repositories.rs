//! SeaORM repository implementations

use crate::contract::{
    Airline, AirlineSummary, Airport, DestinationAirport, Document, ListQuery, Page, Route,
};
use crate::domain::repository::{CatalogRepository, DocumentRepository, GraphRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    sea_query::{Alias, Expr, Func, Order, Query, SelectStatement, Values},
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbBackend, EntityTrait, FromQueryResult, IntoActiveModel, QueryFilter, QueryOrder, QueryTrait,
    Statement,
};
use std::marker::PhantomData;
use std::sync::Arc;

use super::entity::{airline, airport, route};

// ===== Collection descriptors =====

/// Binds a contract document to the SeaORM entity that stores it
pub trait DocumentTable: Send + Sync + 'static {
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;
    type Document: Document;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    fn to_document(model: <Self::Entity as EntityTrait>::Model) -> Result<Self::Document>;

    fn to_active_model(document: &Self::Document) -> Self::ActiveModel;
}

/// Collections that support the filtered listing
pub trait CatalogTable: DocumentTable {
    /// Ascending sort key of the listing
    fn sort_column() -> <Self::Entity as EntityTrait>::Column;

    fn country_column() -> <Self::Entity as EntityTrait>::Column;
}

pub struct AirlineTable;

impl DocumentTable for AirlineTable {
    type Entity = airline::Entity;
    type ActiveModel = airline::ActiveModel;
    type Document = Airline;

    fn id_column() -> airline::Column {
        airline::Column::Id
    }

    fn to_document(model: airline::Model) -> Result<Airline> {
        Ok(model.into())
    }

    fn to_active_model(document: &Airline) -> airline::ActiveModel {
        document.into()
    }
}

impl CatalogTable for AirlineTable {
    fn sort_column() -> airline::Column {
        airline::Column::Name
    }

    fn country_column() -> airline::Column {
        airline::Column::Country
    }
}

pub struct AirportTable;

impl DocumentTable for AirportTable {
    type Entity = airport::Entity;
    type ActiveModel = airport::ActiveModel;
    type Document = Airport;

    fn id_column() -> airport::Column {
        airport::Column::Id
    }

    fn to_document(model: airport::Model) -> Result<Airport> {
        model.try_into()
    }

    fn to_active_model(document: &Airport) -> airport::ActiveModel {
        document.into()
    }
}

impl CatalogTable for AirportTable {
    fn sort_column() -> airport::Column {
        airport::Column::Airportname
    }

    fn country_column() -> airport::Column {
        airport::Column::Country
    }
}

pub struct RouteTable;

impl DocumentTable for RouteTable {
    type Entity = route::Entity;
    type ActiveModel = route::ActiveModel;
    type Document = Route;

    fn id_column() -> route::Column {
        route::Column::Id
    }

    fn to_document(model: route::Model) -> Result<Route> {
        model.try_into()
    }

    fn to_active_model(document: &Route) -> route::ActiveModel {
        document.into()
    }
}

// ===== Document Repository =====

/// CRUD and listing over one collection
pub struct SeaOrmDocumentRepository<T> {
    db: Arc<DatabaseConnection>,
    _table: PhantomData<fn() -> T>,
}

pub type SeaOrmAirlineRepository = SeaOrmDocumentRepository<AirlineTable>;
pub type SeaOrmAirportRepository = SeaOrmDocumentRepository<AirportTable>;
pub type SeaOrmRouteRepository = SeaOrmDocumentRepository<RouteTable>;

impl<T: DocumentTable> SeaOrmDocumentRepository<T> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _table: PhantomData,
        }
    }
}

#[async_trait]
impl<T> DocumentRepository<T::Document> for SeaOrmDocumentRepository<T>
where
    T: DocumentTable,
    <T::Entity as EntityTrait>::Model: IntoActiveModel<T::ActiveModel>,
{
    async fn find_by_id(&self, id: i32) -> Result<Option<T::Document>> {
        let result = T::Entity::find()
            .filter(T::id_column().eq(id))
            .one(&*self.db)
            .await?;

        result.map(T::to_document).transpose()
    }

    async fn upsert(&self, document: &T::Document) -> Result<T::Document> {
        let existing = T::Entity::find()
            .filter(T::id_column().eq(document.id()))
            .one(&*self.db)
            .await?;

        let active = T::to_active_model(document);
        let result = if existing.is_some() {
            active.update(&*self.db).await?
        } else {
            active.insert(&*self.db).await?
        };

        T::to_document(result)
    }

    async fn remove(&self, id: i32) -> Result<bool> {
        let result = T::Entity::delete_many()
            .filter(T::id_column().eq(id))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl<T> CatalogRepository<T::Document> for SeaOrmDocumentRepository<T>
where
    T: CatalogTable,
{
    async fn list(&self, query: &ListQuery) -> Result<Vec<T::Document>> {
        let mut select = T::Entity::find();

        if let Some(country) = &query.country {
            select = select.filter(
                Expr::expr(Func::lower(Expr::col(T::country_column())))
                    .eq(country.to_lowercase()),
            );
        }

        let ordered = select.order_by_asc(T::sort_column()).into_query();
        let stmt = windowed(self.db.get_database_backend(), &ordered, query.page);

        let results = T::Entity::find()
            .from_raw_sql(stmt)
            .all(&*self.db)
            .await?;

        results.into_iter().map(T::to_document).collect()
    }
}

// ===== Graph Repository =====

/// Key prefix of airline documents, as in `airline_137`
const AIRLINE_KEY_PREFIX: &str = "airline_";

#[derive(Debug, FromQueryResult)]
struct AirlineSummaryRow {
    callsign: String,
    country: String,
    iata: String,
    icao: String,
    name: String,
}

#[derive(Debug, FromQueryResult)]
struct DestinationRow {
    destinationairport: String,
}

pub struct SeaOrmGraphRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmGraphRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GraphRepository for SeaOrmGraphRepository {
    async fn airlines_to_airport(
        &self,
        destination: &str,
        page: Page,
    ) -> Result<Vec<AirlineSummary>> {
        let stmt = windowed(
            self.db.get_database_backend(),
            &airlines_to_airport_query(destination),
            page,
        );
        tracing::trace!(sql = %stmt.sql, "airlines to airport");

        let rows = AirlineSummaryRow::find_by_statement(stmt)
            .all(&*self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| AirlineSummary {
                callsign: row.callsign,
                country: row.country,
                iata: row.iata,
                icao: row.icao,
                name: row.name,
            })
            .collect())
    }

    async fn direct_connections(
        &self,
        source: &str,
        page: Page,
    ) -> Result<Vec<DestinationAirport>> {
        let stmt = windowed(
            self.db.get_database_backend(),
            &direct_connections_query(source),
            page,
        );
        tracing::trace!(sql = %stmt.sql, "direct connections");

        let rows = DestinationRow::find_by_statement(stmt).all(&*self.db).await?;

        Ok(rows
            .into_iter()
            .map(|row| DestinationAirport {
                destinationairport: row.destinationairport,
            })
            .collect())
    }
}

/// ```sql
/// SELECT airline.callsign, airline.country, airline.iata, airline.icao, airline.name
/// FROM (SELECT DISTINCT REPLACE(airlineid, 'airline_', '') AS airlineid FROM route
///       WHERE LOWER(destinationairport) = $1) AS served
/// JOIN airline ON served.airlineid = CAST(airline.id AS TEXT)
/// ORDER BY airline.name, airline.id
/// ```
///
/// Airline ids are made distinct before the fetch, so an airline serving
/// the destination on several routes comes back once. References are
/// accepted both bare ("137") and document-keyed ("airline_137").
fn airlines_to_airport_query(destination: &str) -> SelectStatement {
    let served = Alias::new("served");

    let airline_ref = Func::cust(Alias::new("REPLACE"))
        .arg(Expr::col(route::Column::Airlineid))
        .arg(Expr::val(AIRLINE_KEY_PREFIX))
        .arg(Expr::val(""));

    let serving_airlines = Query::select()
        .distinct()
        .expr_as(airline_ref, route::Column::Airlineid)
        .from(route::Entity)
        .and_where(
            Expr::expr(Func::lower(Expr::col(route::Column::Destinationairport)))
                .eq(destination.to_lowercase()),
        )
        .to_owned();

    Query::select()
        .columns([
            (airline::Entity, airline::Column::Callsign),
            (airline::Entity, airline::Column::Country),
            (airline::Entity, airline::Column::Iata),
            (airline::Entity, airline::Column::Icao),
            (airline::Entity, airline::Column::Name),
        ])
        .from_subquery(serving_airlines, served.clone())
        .inner_join(
            airline::Entity,
            Expr::col((served, route::Column::Airlineid)).eq(Func::cast_as(
                Expr::col((airline::Entity, airline::Column::Id)),
                Alias::new("TEXT"),
            )),
        )
        .order_by((airline::Entity, airline::Column::Name), Order::Asc)
        .order_by((airline::Entity, airline::Column::Id), Order::Asc)
        .to_owned()
}

/// ```sql
/// SELECT DISTINCT destinationairport FROM route
/// WHERE LOWER(sourceairport) = $1 AND stops = 0
/// ORDER BY destinationairport
/// ```
fn direct_connections_query(source: &str) -> SelectStatement {
    Query::select()
        .distinct()
        .column(route::Column::Destinationairport)
        .from(route::Entity)
        .and_where(
            Expr::expr(Func::lower(Expr::col(route::Column::Sourceairport)))
                .eq(source.to_lowercase()),
        )
        .and_where(Expr::col(route::Column::Stops).eq(0))
        .order_by(route::Column::Destinationairport, Order::Asc)
        .to_owned()
}

/// Render `select` for `backend` and append `LIMIT ? OFFSET ?` bound to the
/// page as signed integers; sea-query's own window is unsigned.
fn windowed(backend: DbBackend, select: &SelectStatement, page: Page) -> Statement {
    let mut stmt = backend.build(select);
    let mut values = stmt.values.take().map(|v| v.0).unwrap_or_default();

    values.push(page.limit.into());
    let limit = placeholder(backend, values.len());
    values.push(page.offset.into());
    let offset = placeholder(backend, values.len());

    stmt.sql = format!("{} LIMIT {limit} OFFSET {offset}", stmt.sql);
    stmt.values = Some(Values(values));
    stmt
}

fn placeholder(backend: DbBackend, position: usize) -> String {
    match backend {
        DbBackend::Postgres => format!("${position}"),
        _ => "?".to_string(),
    }
}
