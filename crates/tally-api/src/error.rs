//! Error handling for the Tally API.
//!
//! This module provides structured error types that convert to HTTP
//! responses with the right status codes and a JSON error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tally_core::TallyError;
use thiserror::Error;

/// API error type with automatic HTTP status code mapping.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request-shape problems (400 Bad Request)
    #[error("Validation error: {message}")]
    Validation { message: String, field: Option<String> },

    /// Resource not found (404 Not Found)
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// A stored receipt cannot be scored (422 Unprocessable Entity)
    #[error("Malformed receipt: {message}")]
    MalformedReceipt { message: String, field: Option<String> },

    /// Internal server errors (500 Internal Server Error)
    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl ApiError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MalformedReceipt { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::MalformedReceipt { .. } => "MALFORMED_RECEIPT",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Convert to the JSON error body.
    pub fn to_response(&self, request_id: Option<String>) -> ApiErrorResponse {
        let mut details = serde_json::Map::new();

        match self {
            ApiError::Validation { field: Some(field), .. }
            | ApiError::MalformedReceipt { field: Some(field), .. } => {
                details.insert("field".to_string(), serde_json::Value::String(field.clone()));
            }
            _ => {}
        }

        ApiErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: if details.is_empty() {
                None
            } else {
                Some(serde_json::Value::Object(details))
            },
            request_id,
            timestamp: Utc::now(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into(), field: None }
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a simple internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }
}

/// JSON-serializable error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    /// Stable error code, e.g. `NOT_FOUND`
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,

    /// Request ID for tracking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.to_response(None);
        (status, Json(body)).into_response()
    }
}

impl From<TallyError> for ApiError {
    fn from(error: TallyError) -> Self {
        match error {
            TallyError::ReceiptNotFound { receipt_id } => {
                Self::NotFound { resource: format!("receipt {receipt_id}") }
            }
            TallyError::MalformedReceipt { receipt_id, field, value, message: detail } => {
                Self::MalformedReceipt {
                    message: format!(
                        "receipt {receipt_id}: field '{field}' value '{value}' cannot be interpreted ({detail})"
                    ),
                    field: Some(field),
                }
            }
        }
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
