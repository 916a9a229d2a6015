use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Failure raised by a `UserStore` adapter.
///
/// Business outcomes (missing rows, lost referral races) are reported through
/// return values; this type only carries backend failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store backend error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store returned corrupt data: {message} {location}")]
    Corrupt {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupt<S: Into<String>>(message: S) -> Self {
        Self::Corrupt {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
