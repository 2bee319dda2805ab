//! Typed error handling for the API
//!
//! [`ApiError`] covers everything a handler can surface. Validation failures
//! carry the field→messages mapping and render as 422 with the bare mapping
//! as the JSON body (the wire contract for write rejections). All other
//! errors render as a structured `{code, message, details}` envelope.

use crate::core::validation::Violations;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The error type returned by request handlers
#[derive(Debug)]
pub enum ApiError {
    /// The request body failed one or more validation rules
    Validation(Violations),

    /// No cat exists with the requested id
    NotFound { id: Uuid },

    /// The storage collaborator failed
    Storage(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(violations) => {
                let fields: Vec<&str> = violations.fields().collect();
                write!(f, "Validation failed for: {}", fields.join(", "))
            }
            ApiError::NotFound { id } => write!(f, "cat with id '{}' not found", id),
            ApiError::Storage(message) => write!(f, "Storage error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Error response envelope for non-validation failures
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_FAILED",
            ApiError::NotFound { .. } => "CAT_NOT_FOUND",
            ApiError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to the envelope used by non-validation responses
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::NotFound { id } => Some(serde_json::json!({ "id": id.to_string() })),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            // 422 bodies are the violation mapping itself, not the envelope
            ApiError::Validation(violations) => (status, Json(violations)).into_response(),
            other => (status, Json(other.to_response())).into_response(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}

/// A specialized Result type for handler operations
pub type ApiResult<T> = Result<T, ApiError>;
