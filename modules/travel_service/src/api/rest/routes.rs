//! Route registration for the travel REST API

use super::handlers::{self, RestState};
use crate::config::Config;
use crate::contract::Page;
use crate::domain::Service;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

/// Register all REST routes under the configured base path
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    config: &Config,
) -> anyhow::Result<Router> {
    if !config.base_path.starts_with('/') {
        anyhow::bail!("base_path must start with '/': {}", config.base_path);
    }

    let state = Arc::new(RestState {
        service,
        default_page: Page::new(config.default_limit, config.default_offset),
        base_path: config.base_path.clone(),
    });

    let api = Router::new()
        // Airline endpoints
        .route("/airline/list", get(handlers::list_airlines))
        .route("/airline/to-airport", get(handlers::airlines_to_airport))
        .route("/airline", post(handlers::create_airline))
        .route(
            "/airline/{id}",
            get(handlers::get_airline)
                .put(handlers::update_airline)
                .delete(handlers::delete_airline),
        )
        // Airport endpoints
        .route("/airport/list", get(handlers::list_airports))
        .route("/airport/direct-connections", get(handlers::direct_connections))
        .route("/airport", post(handlers::create_airport))
        .route(
            "/airport/{id}",
            get(handlers::get_airport)
                .put(handlers::update_airport)
                .delete(handlers::delete_airport),
        )
        // Route endpoints
        .route("/route", post(handlers::create_route))
        .route(
            "/route/{id}",
            get(handlers::get_route)
                .put(handlers::update_route)
                .delete(handlers::delete_route),
        )
        .layer(Extension(state));

    let router = if config.base_path == "/" {
        router.merge(api)
    } else {
        router.nest(config.base_path.trim_end_matches('/'), api)
    };

    Ok(router)
}
