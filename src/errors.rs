// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and error response.
/// UpstreamRequest is normally recovered inside the aggregation loop and only
/// reaches a handler if a caller chooses to propagate it.
#[derive(Error, Debug)]
pub enum AttractionsError {
    #[error("{0}")]
    Configuration(String),

    #[error("Upstream request failed: {0}")]
    UpstreamRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl AttractionsError {
    fn code(&self) -> &'static str {
        match self {
            AttractionsError::Configuration(_) => "CONFIGURATION_ERROR",
            AttractionsError::UpstreamRequest(_) => "UPSTREAM_REQUEST_ERROR",
            AttractionsError::NotFound(_) => "NOT_FOUND",
        }
    }
}

/// Convert AttractionsError to HTTP response
/// DOCUMENTATION: `detail` carries the human readable message, `error` the
/// structured code/message/timestamp triple.
impl ResponseError for AttractionsError {
    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();

        let body = json!({
            "detail": message,
            "error": {
                "code": self.code(),
                "message": message,
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AttractionsError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AttractionsError::UpstreamRequest(_) => StatusCode::BAD_GATEWAY,
            AttractionsError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}
