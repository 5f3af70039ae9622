//! Error types for FacDash services
//!
//! Provides a comprehensive error handling system with:
//! - Distinct error types for different failure modes
//! - HTTP status code mapping
//! - Structured error responses
//! - Error codes for client handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Error codes for machine-readable error identification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors (1xxx)
    ValidationError,

    // Resource errors (4xxx)
    NotFound,
    ProfessorNotFound,
    NoPublicationData,

    // Lookup store errors (7xxx)
    LookupUnavailable,
    MalformedRecord,

    // Internal errors (9xxx)
    InternalError,
    ConfigurationError,
}

impl ErrorCode {
    /// Get the numeric code for this error
    pub fn as_code(&self) -> u16 {
        match self {
            // Validation (1xxx)
            ErrorCode::ValidationError => 1001,

            // Resources (4xxx)
            ErrorCode::NotFound => 4001,
            ErrorCode::ProfessorNotFound => 4002,
            ErrorCode::NoPublicationData => 4003,

            // Lookup store (7xxx)
            ErrorCode::LookupUnavailable => 7001,
            ErrorCode::MalformedRecord => 7002,

            // Internal (9xxx)
            ErrorCode::InternalError => 9001,
            ErrorCode::ConfigurationError => 9002,
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    // Resource errors
    #[error("Resource not found: {resource_type} with key {key}")]
    NotFound { resource_type: String, key: String },

    #[error("Professor not found: {name}")]
    ProfessorNotFound { name: String },

    #[error("No publication data for: {name}")]
    NoPublicationData { name: String },

    // Lookup store errors
    #[error("Lookup store unavailable: {message}")]
    LookupUnavailable { message: String },

    #[error("Malformed record: {message}")]
    MalformedRecord { message: String },

    // Internal errors
    #[error("Internal server error: {message}")]
    Internal { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    // Generic
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { .. } => ErrorCode::ValidationError,
            AppError::NotFound { .. } => ErrorCode::NotFound,
            AppError::ProfessorNotFound { .. } => ErrorCode::ProfessorNotFound,
            AppError::NoPublicationData { .. } => ErrorCode::NoPublicationData,
            AppError::LookupUnavailable { .. } => ErrorCode::LookupUnavailable,
            AppError::MalformedRecord { .. } => ErrorCode::MalformedRecord,
            AppError::Internal { .. } => ErrorCode::InternalError,
            AppError::Configuration { .. } => ErrorCode::ConfigurationError,
            AppError::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,

            // 404 Not Found - the UI renders these as an empty state
            AppError::NotFound { .. }
            | AppError::ProfessorNotFound { .. }
            | AppError::NoPublicationData { .. } => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            AppError::MalformedRecord { .. }
            | AppError::Internal { .. }
            | AppError::Configuration { .. }
            | AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,

            // 503 Service Unavailable - backing store unreachable
            AppError::LookupUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Check if this error should be logged at error level
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Check if this error is a client error
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

/// Structured error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();
        let message = self.to_string();

        // Log based on severity
        if self.is_server_error() {
            tracing::error!(
                error = %message,
                code = ?code,
                status = status.as_u16(),
                "Server error"
            );
        } else if self.is_client_error() {
            tracing::warn!(
                error = %message,
                code = ?code,
                status = status.as_u16(),
                "Client error"
            );
        }

        let body = ErrorResponse {
            error: ErrorDetails {
                code,
                message,
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::LookupUnavailable {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedRecord {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        let err = AppError::ProfessorNotFound { name: "test".into() };
        assert_eq!(err.code(), ErrorCode::ProfessorNotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.code().as_code(), 4002);
    }

    #[test]
    fn test_not_found_is_client_error() {
        let err = AppError::NoPublicationData { name: "test".into() };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.is_client_error());
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_store_unavailable() {
        let err = AppError::LookupUnavailable {
            message: "data directory missing".into(),
        };
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.is_server_error());
    }

    #[test]
    fn test_malformed_record_fails_loudly() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AppError = json_err.into();
        assert_eq!(err.code(), ErrorCode::MalformedRecord);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_io_error_maps_to_lookup_unavailable() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: AppError = io_err.into();
        assert_eq!(err.code(), ErrorCode::LookupUnavailable);
    }
}
