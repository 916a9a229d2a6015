//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use pl_auth::AuthError;
use pl_core::{CoreError, LedgerError};

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or invalid input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        code: &'static str,
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Missing, invalid, expired or stale credential (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// User or referrer absent (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Referral already claimed (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Request exceeded the configured deadline (408)
    #[error("Request timed out {location}")]
    Timeout { location: ErrorLocation },

    /// Internal server error (500). `message` is logged, never sent.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        ApiError::Validation {
            code: "VALIDATION_ERROR",
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Timeout { .. } => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let body = match self {
            ApiError::Validation {
                code,
                message,
                field,
                ..
            } => ApiErrorBody {
                code: code.into(),
                message,
                field,
            },
            ApiError::Unauthorized { code, message, .. } => ApiErrorBody {
                code: code.into(),
                message,
                field: None,
            },
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Conflict { message, .. } => ApiErrorBody {
                code: "ALREADY_INVITED".into(),
                message,
                field: None,
            },
            ApiError::Timeout { .. } => ApiErrorBody {
                code: "TIMEOUT".into(),
                message: "Request timed out".into(),
                field: None,
            },
            ApiError::Internal { .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message: "Internal server error".into(),
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            code: "VALIDATION_ERROR",
            message: e.to_string(),
            field: e.field().map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<LedgerError> for ApiError {
    #[track_caller]
    fn from(e: LedgerError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            LedgerError::Validation { source, .. } => ApiError::Validation {
                code: "VALIDATION_ERROR",
                message: source.to_string(),
                field: source.field().map(str::to_string),
                location,
            },
            LedgerError::UnknownTask { task, .. } => ApiError::Validation {
                code: "UNKNOWN_TASK",
                message: format!("Unknown task '{}'", task),
                field: Some("task".to_string()),
                location,
            },
            LedgerError::SelfReferral { user_id, .. } => ApiError::Validation {
                code: "SELF_REFERRAL",
                message: format!("User {} cannot invite themselves", user_id),
                field: Some("referrer".to_string()),
                location,
            },
            LedgerError::NotFound { user_id, .. } => ApiError::NotFound {
                message: format!("User {} not found", user_id),
                location,
            },
            LedgerError::AlreadyInvited { user_id, .. } => ApiError::Conflict {
                message: format!("User {} has already been invited", user_id),
                location,
            },
            LedgerError::Storage { source, .. } => ApiError::Internal {
                message: source.to_string(),
                location,
            },
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::UserNotFound { user_id, .. } => ApiError::NotFound {
                message: format!("User {} not found", user_id),
                location,
            },
            AuthError::JwtEncode { .. } | AuthError::Store { .. } => ApiError::Internal {
                message: e.to_string(),
                location,
            },
            _ => ApiError::Unauthorized {
                code: e.error_code(),
                message: match e {
                    AuthError::MissingHeader { .. } => "Missing Authorization header".to_string(),
                    AuthError::InvalidScheme { .. } => {
                        "Authorization header must use the Bearer scheme".to_string()
                    }
                    AuthError::TokenExpired { .. } => "Token expired".to_string(),
                    AuthError::StaleCredential { .. } => {
                        "Token no longer matches the user profile".to_string()
                    }
                    _ => "Invalid token".to_string(),
                },
                location,
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text(), None)
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(rejection: QueryRejection) -> Self {
        ApiError::validation(rejection.body_text(), None)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
