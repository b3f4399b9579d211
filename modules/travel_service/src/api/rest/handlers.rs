//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
    extract::{ApiJson, ApiPath, ApiQuery},
};
use crate::contract::{Document, DocumentUpdate, ListQuery, Page};
use crate::domain::{CrudService, Service};
use axum::{
    http::{header, HeaderName, StatusCode},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Shared state of the REST layer
pub struct RestState {
    pub service: Arc<Service>,
    /// Window applied when the caller omits limit/offset
    pub default_page: Page,
    /// Prefix used to build `Location` headers
    pub base_path: String,
}

impl RestState {
    fn page(&self, limit: Option<i64>, offset: Option<i64>) -> Page {
        Page::new(
            limit.unwrap_or(self.default_page.limit),
            offset.unwrap_or(self.default_page.offset),
        )
    }

    fn location<D: Document>(&self, id: i32) -> String {
        format!("{}/{}/{}", self.base_path.trim_end_matches('/'), D::RESOURCE, id)
    }
}

type Created<T> = (StatusCode, [(HeaderName, String); 1], Json<T>);

// ===== Query parameters =====

/// Query parameters for listing airlines and airports
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive country filter
    pub country: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters of the airlines-to-airport lookup
#[derive(Debug, Deserialize)]
pub struct ToAirportParams {
    #[serde(rename = "destinationAirportCode")]
    pub destination_airport_code: String,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters of the direct-connections lookup
#[derive(Debug, Deserialize)]
pub struct DirectConnectionsParams {
    pub airport: String,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ===== Generic document handlers =====

async fn get_document<D, T>(crud: &CrudService<D>, id: i32) -> Result<Json<T>, Problem>
where
    D: Document,
    T: From<D>,
{
    let document = crud.get_by_id(id).await.map_err(map_domain_error)?;
    Ok(Json(document.into()))
}

async fn create_document<D, T>(
    state: &RestState,
    crud: &CrudService<D>,
    document: D,
) -> Result<Created<T>, Problem>
where
    D: Document,
    T: From<D>,
{
    let created = crud.create(document).await.map_err(map_domain_error)?;
    let location = state.location::<D>(created.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created.into()),
    ))
}

async fn update_document<D, U, T>(
    crud: &CrudService<D>,
    id: i32,
    update: U,
) -> Result<Json<T>, Problem>
where
    D: Document,
    U: DocumentUpdate<D>,
    T: From<D>,
{
    let updated = crud
        .update_by_id(id, update)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(updated.into()))
}

async fn delete_document<D: Document>(
    crud: &CrudService<D>,
    id: i32,
) -> Result<StatusCode, Problem> {
    crud.delete_by_id(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ===== Airline Handlers =====

/// List airlines, optionally filtered by country
pub async fn list_airlines(
    Extension(state): Extension<Arc<RestState>>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Vec<AirlineDto>>, Problem> {
    let query = ListQuery::new(params.country, state.page(params.limit, params.offset));
    let airlines = state
        .service
        .list_airlines(&query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(airlines.into_iter().map(Into::into).collect()))
}

/// Airlines flying into the destination airport
pub async fn airlines_to_airport(
    Extension(state): Extension<Arc<RestState>>,
    ApiQuery(params): ApiQuery<ToAirportParams>,
) -> Result<Json<Vec<AirlineSummaryDto>>, Problem> {
    let page = state.page(params.limit, params.offset);
    let airlines = state
        .service
        .airlines_to_airport(&params.destination_airport_code, page)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(airlines.into_iter().map(Into::into).collect()))
}

pub async fn get_airline(
    Extension(state): Extension<Arc<RestState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<AirlineDto>, Problem> {
    get_document(state.service.airlines(), id).await
}

pub async fn create_airline(
    Extension(state): Extension<Arc<RestState>>,
    ApiJson(req): ApiJson<CreateAirlineRequest>,
) -> Result<Created<AirlineDto>, Problem> {
    create_document(&state, state.service.airlines(), req.into()).await
}

pub async fn update_airline(
    Extension(state): Extension<Arc<RestState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateAirlineRequest>,
) -> Result<Json<AirlineDto>, Problem> {
    update_document(
        state.service.airlines(),
        id,
        crate::contract::AirlineUpdate::from(req),
    )
    .await
}

pub async fn delete_airline(
    Extension(state): Extension<Arc<RestState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, Problem> {
    delete_document(state.service.airlines(), id).await
}

// ===== Airport Handlers =====

/// List airports, optionally filtered by country
pub async fn list_airports(
    Extension(state): Extension<Arc<RestState>>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Vec<AirportDto>>, Problem> {
    let query = ListQuery::new(params.country, state.page(params.limit, params.offset));
    let airports = state
        .service
        .list_airports(&query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(airports.into_iter().map(Into::into).collect()))
}

/// Destinations reachable from the airport without stops
pub async fn direct_connections(
    Extension(state): Extension<Arc<RestState>>,
    ApiQuery(params): ApiQuery<DirectConnectionsParams>,
) -> Result<Json<Vec<DestinationAirportDto>>, Problem> {
    let page = state.page(params.limit, params.offset);
    let destinations = state
        .service
        .direct_connections(&params.airport, page)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(destinations.into_iter().map(Into::into).collect()))
}

pub async fn get_airport(
    Extension(state): Extension<Arc<RestState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<AirportDto>, Problem> {
    get_document(state.service.airports(), id).await
}

pub async fn create_airport(
    Extension(state): Extension<Arc<RestState>>,
    ApiJson(req): ApiJson<CreateAirportRequest>,
) -> Result<Created<AirportDto>, Problem> {
    create_document(&state, state.service.airports(), req.into()).await
}

pub async fn update_airport(
    Extension(state): Extension<Arc<RestState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateAirportRequest>,
) -> Result<Json<AirportDto>, Problem> {
    update_document(
        state.service.airports(),
        id,
        crate::contract::AirportUpdate::from(req),
    )
    .await
}

pub async fn delete_airport(
    Extension(state): Extension<Arc<RestState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, Problem> {
    delete_document(state.service.airports(), id).await
}

// ===== Route Handlers =====

pub async fn get_route(
    Extension(state): Extension<Arc<RestState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<RouteDto>, Problem> {
    get_document(state.service.routes(), id).await
}

pub async fn create_route(
    Extension(state): Extension<Arc<RestState>>,
    ApiJson(req): ApiJson<CreateRouteRequest>,
) -> Result<Created<RouteDto>, Problem> {
    create_document(&state, state.service.routes(), req.into()).await
}

pub async fn update_route(
    Extension(state): Extension<Arc<RestState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateRouteRequest>,
) -> Result<Json<RouteDto>, Problem> {
    update_document(
        state.service.routes(),
        id,
        crate::contract::RouteUpdate::from(req),
    )
    .await
}

pub async fn delete_route(
    Extension(state): Extension<Arc<RestState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, Problem> {
    delete_document(state.service.routes(), id).await
}
