//! REST API layer

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod mapper;
pub mod routes;
