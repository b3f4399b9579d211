//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::TravelError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(self),
        )
            .into_response()
    }
}

/// Problem for a request the extractors could not parse
fn rejection(status: StatusCode, detail: String) -> Problem {
    Problem::new(status, status.canonical_reason().unwrap_or("Bad Request")).with_detail(detail)
}

impl From<QueryRejection> for Problem {
    fn from(err: QueryRejection) -> Self {
        rejection(err.status(), err.body_text())
    }
}

impl From<PathRejection> for Problem {
    fn from(err: PathRejection) -> Self {
        rejection(err.status(), err.body_text())
    }
}

impl From<JsonRejection> for Problem {
    fn from(err: JsonRejection) -> Self {
        rejection(err.status(), err.body_text())
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: TravelError) -> Problem {
    match error {
        TravelError::NotFound { resource, id } => {
            Problem::new(StatusCode::NOT_FOUND, format!("{resource} Not Found"))
                .with_detail(format!("{resource} '{id}' was not found"))
        }

        TravelError::StoreFailure { message } => {
            // store details stay in the log, never in the response
            tracing::error!(error = %message, "store failure");
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail("An unexpected error occurred")
        }
    }
}
