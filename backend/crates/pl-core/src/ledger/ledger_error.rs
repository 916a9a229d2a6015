use crate::{CoreError, ErrorLocation, StoreError, UserId};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Validation failed: {source}")]
    Validation {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Unknown task '{task}' {location}")]
    UnknownTask {
        task: String,
        location: ErrorLocation,
    },

    #[error("User {user_id} not found {location}")]
    NotFound {
        user_id: UserId,
        location: ErrorLocation,
    },

    #[error("User {user_id} has already been invited {location}")]
    AlreadyInvited {
        user_id: UserId,
        location: ErrorLocation,
    },

    #[error("User {user_id} cannot invite themselves {location}")]
    SelfReferral {
        user_id: UserId,
        location: ErrorLocation,
    },

    #[error("Storage failure: {source} {location}")]
    Storage {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl From<CoreError> for LedgerError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for LedgerError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
