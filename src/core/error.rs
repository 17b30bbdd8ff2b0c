//! Typed error handling for the article service
//!
//! Every fallible operation in the service returns an [`AppError`], so the
//! HTTP layer can map errors to status codes without string matching.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: rejected input (field violations, malformed JSON, bad ids or filters)
//! - [`EntityError`]: resource-level failures such as a missing article
//! - [`StorageError`]: database connectivity and query failures
//! - [`ConfigError`]: configuration loading failures, surfaced by the binaries
//!   rather than over HTTP
//!
//! # Example
//!
//! ```rust,ignore
//! match service.get_by_id(42).await {
//!     Ok(article) => println!("{}", article.title),
//!     Err(AppError::Entity(EntityError::NotFound { id, .. })) => println!("{} is gone", id),
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use crate::core::response::ApiResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The main error type for the service
#[derive(Debug)]
pub enum AppError {
    /// Input rejected before reaching storage
    Validation(ValidationError),

    /// Resource-level errors
    Entity(EntityError),

    /// Storage backend errors
    Storage(StorageError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "{}", e),
            AppError::Entity(e) => write!(f, "{}", e),
            AppError::Storage(e) => write!(f, "{}", e),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Validation(e) => Some(e),
            AppError::Entity(e) => Some(e),
            AppError::Storage(e) => Some(e),
            AppError::Internal(_) => None,
        }
    }
}

/// Body of a failed response
///
/// Either a single message or a list of field errors, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    Message(String),
    Violations(Vec<FieldError>),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(e) => e.status_code(),
            AppError::Entity(e) => e.status_code(),
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(e) => e.error_code(),
            AppError::Entity(e) => e.error_code(),
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// What the client gets to see
    ///
    /// Server-side failures are reported opaquely; their details only go to the log.
    pub fn body(&self) -> ErrorBody {
        match self {
            AppError::Validation(ValidationError::FieldErrors(errors)) => {
                ErrorBody::Violations(errors.clone())
            }
            AppError::Validation(e) => ErrorBody::Message(e.to_string()),
            AppError::Entity(e) => ErrorBody::Message(e.to_string()),
            AppError::Storage(_) | AppError::Internal(_) => {
                ErrorBody::Message("internal server error".to_string())
            }
        }
    }

    pub fn not_found(entity_type: &str, id: i64) -> Self {
        AppError::Entity(EntityError::NotFound {
            entity_type: entity_type.to_string(),
            id,
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::debug!(code = self.error_code(), error = %self, "request rejected");
        }

        let body = Json(ApiResponse::<()>::failure(self.body()));
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field validation error, as sent to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub tag: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub param: String,
}

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// One or more constraint violations
    FieldErrors(Vec<FieldError>),

    /// Request body is not valid JSON for the expected shape
    InvalidJson { message: String },

    /// Path identifier is not an integer
    InvalidId { value: String },

    /// Query filter has an unsupported value
    InvalidFilter { field: String, message: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "{}", msgs.join(", "))
            }
            ValidationError::InvalidJson { .. } => write!(f, "invalid JSON body"),
            ValidationError::InvalidId { .. } => write!(f, "id harus integer"),
            ValidationError::InvalidFilter { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::FieldErrors(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ValidationError::InvalidJson { .. } => StatusCode::BAD_REQUEST,
            ValidationError::InvalidId { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ValidationError::InvalidFilter { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
            ValidationError::InvalidId { .. } => "INVALID_ID",
            ValidationError::InvalidFilter { .. } => "INVALID_FILTER",
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to resource operations
#[derive(Debug)]
pub enum EntityError {
    /// No record with this identifier
    NotFound { entity_type: String, id: i64 },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { entity_type, .. } => {
                write!(f, "{} tidak ditemukan", entity_type)
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
        }
    }
}

impl From<EntityError> for AppError {
    fn from(err: EntityError) -> Self {
        AppError::Entity(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug)]
pub enum StorageError {
    /// Connection error
    ConnectionError { backend: String, message: String },

    /// Query execution error
    QueryError { backend: String, message: String },

    /// Data integrity error (e.g. a row that cannot be decoded)
    IntegrityError { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ConnectionError { backend, message } => {
                write!(f, "Failed to connect to {}: {}", backend, message)
            }
            StorageError::QueryError { backend, message } => {
                write!(f, "{} query error: {}", backend, message)
            }
            StorageError::IntegrityError { message } => {
                write!(f, "Data integrity error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err)
    }
}

#[cfg(feature = "mysql")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StorageError::ConnectionError {
                backend: "MySQL".to_string(),
                message: err.to_string(),
            },
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                StorageError::IntegrityError {
                    message: err.to_string(),
                }
            }
            other => StorageError::QueryError {
                backend: "MySQL".to_string(),
                message: other.to_string(),
            },
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file '{file}': {message}")]
    ParseError { file: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    #[error("Missing required setting '{field}'")]
    MissingField { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}


// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for service operations
pub type AppResult<T> = Result<T, AppError>;
