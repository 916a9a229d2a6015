use pl_core::{StoreError, UserId};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    /// Token is genuine but no longer matches the stored user
    #[error("Stale credential for user {user_id}: {message} {location}")]
    StaleCredential {
        user_id: UserId,
        message: String,
        location: ErrorLocation,
    },

    #[error("User {user_id} not found {location}")]
    UserNotFound {
        user_id: UserId,
        location: ErrorLocation,
    },

    #[error("Credential lookup failed: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Whether the caller should be told to re-authenticate (401)
    pub fn is_unauthorized(&self) -> bool {
        !matches!(
            self,
            Self::UserNotFound { .. } | Self::JwtEncode { .. } | Self::Store { .. }
        )
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::JwtEncode { .. } => "JWT_ENCODE_FAILED",
            Self::StaleCredential { .. } => "STALE_CREDENTIAL",
            Self::UserNotFound { .. } => "NOT_FOUND",
            Self::Store { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
