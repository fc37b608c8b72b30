//! eventdesk — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use eventdesk_core::error::DomainError;
use eventdesk_core::id::ParseEventIdError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer error that implements `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Error reported by the domain or the repository.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The `{id}` path segment is not an event id.
    #[error(transparent)]
    InvalidId(#[from] ParseEventIdError),

    /// The request body could not be decoded.
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            Self::Domain(DomainError::EventNotFound(_)) => {
                (StatusCode::NOT_FOUND, "event_not_found")
            }
            Self::Domain(DomainError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "validation_error")
            }
            Self::Domain(DomainError::Infrastructure(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
            }
            Self::InvalidId(_) => (StatusCode::BAD_REQUEST, "invalid_event_id"),
            Self::MalformedBody(_) => (StatusCode::BAD_REQUEST, "malformed_body"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
