//! Domain layer - business logic and services

pub mod repository;
pub mod service;

pub use repository::{CatalogRepository, DocumentRepository, GraphRepository};
pub use service::{CrudService, Repositories, Service};
