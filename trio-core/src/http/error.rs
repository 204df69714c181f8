//! API error types with IntoResponse
//!
//! Errors are converted to `{success: false, error: <code>, message}` bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Request could not be processed (422, logged)
    Unprocessable { reason: String },

    /// Storage failure while processing the request (422, logged)
    Database(DbError),

    /// Internal error (500)
    Internal { message: String },
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn unprocessable(reason: impl Into<String>) -> Self {
        Self::Unprocessable {
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unprocessable { .. } | Self::Database(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message, fixed per status. Details stay in the log.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "bad request",
            Self::NotFound { .. } => "resource not found",
            Self::Unprocessable { .. } | Self::Database(_) => "unprocessable",
            Self::Internal { .. } => "internal server error",
        }
    }

    /// Emit the log line for failures the client cannot see the cause of.
    pub fn log(&self) {
        match self {
            Self::Unprocessable { reason } => tracing::warn!("Unprocessable request: {}", reason),
            Self::Database(e) => tracing::error!("Database error: {}", e),
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
            Self::Validation(e) => tracing::debug!("Validation failed: {}", e),
            Self::NotFound { resource, id } => tracing::debug!(resource = %resource, id = %id, "Not found"),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unprocessable { reason } => write!(f, "unprocessable: {}", reason),
            Self::Database(e) => write!(f, "{}", e),
            Self::Internal { message } => write!(f, "internal error: {}", message),
            Self::Validation(e) => write!(f, "{}", e),
            Self::NotFound { resource, id } => write!(f, "{} '{}' not found", resource, id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        Self::Database(DbError::Sqlx(e))
    }
}
