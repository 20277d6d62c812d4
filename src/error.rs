//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the registry returns [`AppError`]. Handlers
//! propagate it with `?` and axum turns it into a JSON error response via
//! [`IntoResponse`].
//!
//! # Response Format
//!
//! ```json
//! {
//!   "error": {
//!     "code": "validation_error",
//!     "message": "originalUrl is required",
//!     "details": { "field": "originalUrl" }
//!   }
//! }
//! ```
//!
//! Internal errors never expose their cause to the client. The message is
//! replaced with a generic one and the original is logged.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Message returned to clients for every internal error.
const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Error taxonomy of the link registry.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or invalid input (400).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Unknown short code (404).
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Short code space exhausted after retries (409).
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Store unavailable or write failure (500).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Converts the error into the payload sent to clients.
    ///
    /// Internal errors are redacted.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Internal { .. } => ErrorInfo {
                code: self.code(),
                message: INTERNAL_MESSAGE.to_string(),
                details: json!({}),
            },
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details } => ErrorInfo {
                code: self.code(),
                message: message.clone(),
                details: details.clone(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message, details } = &self {
            tracing::error!(%message, %details, "Request failed with internal error");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let messages: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), json!(messages))
            })
            .collect::<serde_json::Map<String, Value>>();

        AppError::bad_request("Validation failed", Value::Object(details))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "field": "originalUrl", "reason": rejection.body_text() }),
        )
    }
}
