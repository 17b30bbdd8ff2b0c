//! Response envelope shared by every endpoint
//!
//! ```json
//! {"success": true, "data": {...}, "message": "article created successfully"}
//! {"success": false, "error": "article tidak ditemukan"}
//! {"success": false, "errors": [{"field": "title", "message": "title wajib diisi", "tag": "required"}]}
//! ```

use crate::core::error::{ErrorBody, FieldError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
            errors: None,
        }
    }

    /// Successful response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
            errors: None,
        }
    }

    pub fn failure(body: ErrorBody) -> Self {
        let (error, errors) = match body {
            ErrorBody::Message(msg) => (Some(msg), None),
            ErrorBody::Violations(list) => (None, Some(list)),
        };

        Self {
            success: false,
            data: None,
            message: None,
            error,
            errors,
        }
    }

    /// Pair the envelope with a status code
    pub fn with_status(self, status: StatusCode) -> Reply<T> {
        Reply { status, body: self }
    }
}

/// An envelope with its HTTP status
#[derive(Debug)]
pub struct Reply<T> {
    pub status: StatusCode,
    pub body: ApiResponse<T>,
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
