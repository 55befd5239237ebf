//! Error types for the shopping list service

use super::models::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Result type alias for shopping list operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or mutating the shopping list
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The requested name was empty after trimming
    #[error("Item name must not be empty")]
    EmptyName,

    /// No item carries the requested id
    #[error("Item {0} not found")]
    NotFound(u64),

    /// The path segment is not an item id
    #[error("Item {0} not found")]
    InvalidId(String),

    /// The request body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Every id up to `u64::MAX` has been used
    #[error("No item ids left to assign")]
    IdExhausted,

    /// The data file could not be read or written
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not a JSON array of items
    #[error("Malformed data file: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::EmptyName | Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) | Error::InvalidId(_) => StatusCode::NOT_FOUND,
            Error::IdExhausted | Error::Io(_) | Error::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "storage failure");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
