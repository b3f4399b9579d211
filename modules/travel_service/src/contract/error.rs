//! Contract error types for travel service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// Travel service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TravelError {
    /// Document absent by id, or a listing/lookup produced no rows
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (airline, airport, route, ...)
        resource: String,
        /// Resource identifier or query description
        id: String,
    },
    /// The underlying store call failed
    #[error("store failure: {message}")]
    StoreFailure {
        /// Store error rendered with its cause chain
        message: String,
    },
}

impl TravelError {
    pub fn not_found(resource: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.to_string(),
        }
    }

    pub fn store(error: anyhow::Error) -> Self {
        Self::StoreFailure {
            message: format!("{error:#}"),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
