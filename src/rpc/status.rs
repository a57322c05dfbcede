//! Status taxonomy of the remote-procedure surface.

use crate::task::services::TaskRegistryError;
use axum::Json;
use axum::http::StatusCode as HttpStatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The five status codes surfaced to callers. No operation produces
/// anything outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    /// The token is bad, missing, or expired.
    Unauthenticated,
    /// The identity is valid but lacks the required role.
    PermissionDenied,
    /// The payload is malformed or out of range.
    InvalidArgument,
    /// The operation targeted an id with no matching visible row.
    NotFound,
    /// Store or infrastructure failure not attributable to caller input.
    Internal,
}

impl StatusCode {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::NotFound => "NOT_FOUND",
            Self::Internal => "INTERNAL",
        }
    }

    /// Returns the HTTP status the code is carried on.
    #[must_use]
    pub const fn http_status(self) -> HttpStatusCode {
        match self {
            Self::Unauthenticated => HttpStatusCode::UNAUTHORIZED,
            Self::PermissionDenied => HttpStatusCode::FORBIDDEN,
            Self::InvalidArgument => HttpStatusCode::BAD_REQUEST,
            Self::NotFound => HttpStatusCode::NOT_FOUND,
            Self::Internal => HttpStatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Wire-level error carrying a status code and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{}: {}", .code.as_str(), .message)]
pub struct RpcError {
    /// Taxonomy code.
    pub code: StatusCode,
    /// Human-readable reason.
    pub message: String,
}

impl RpcError {
    /// Creates an error with the given code and message.
    #[must_use]
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<TaskRegistryError> for RpcError {
    fn from(err: TaskRegistryError) -> Self {
        let code = match &err {
            TaskRegistryError::Unauthenticated(_) => StatusCode::Unauthenticated,
            TaskRegistryError::PermissionDenied => StatusCode::PermissionDenied,
            TaskRegistryError::Validation(_) => StatusCode::InvalidArgument,
            TaskRegistryError::NotFound(_) => StatusCode::NotFound,
            TaskRegistryError::Repository(_) => StatusCode::Internal,
        };
        Self::new(code, err.to_string())
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        (self.code.http_status(), Json(self)).into_response()
    }
}
