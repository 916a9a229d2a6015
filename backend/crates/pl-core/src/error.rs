use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid email '{email}': {message} {location}")]
    InvalidEmail {
        email: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Nickname is required {location}")]
    MissingNickname { location: ErrorLocation },

    #[error("Invalid user id '{value}' {location}")]
    InvalidUserId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid page request: {message} {location}")]
    InvalidPage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid reward for task '{task}': {message} {location}")]
    InvalidReward {
        task: String,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Name of the request field the error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidEmail { .. } => Some("email"),
            Self::MissingNickname { .. } => Some("nickname"),
            Self::InvalidUserId { .. } => Some("id"),
            Self::InvalidPage { .. } => Some("page"),
            Self::InvalidReward { .. } => Some("rewards"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
