//! API error types with IntoResponse
//!
//! Every error leaves the service as `{"error": "<message>"}` with the status
//! carrying the category. Storage details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// No `Authorization` header, or an empty one (401)
    MissingToken,

    /// Token failed verification (401)
    InvalidToken,

    /// Request body did not parse as the expected shape (400)
    InvalidInput,

    /// Storage failure (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingToken | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingToken => "No token provided",
            Self::InvalidToken => "Invalid token",
            Self::InvalidInput => "Invalid input",
            Self::Database(_) => "Database error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Database(e) = &self {
            // Log the actual error, return generic message
            tracing::error!("Database error: {}", e);
        }

        let body = json!({ "error": self.message() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
