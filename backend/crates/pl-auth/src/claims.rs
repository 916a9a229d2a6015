use crate::{AuthError, Result as AuthErrorResult};

use pl_core::{User, UserId};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identity snapshot carried by a bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub email: String,
    pub nickname: String,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
}

impl Claims {
    pub fn for_user(user: &User, exp: i64) -> Self {
        Self {
            user_id: user.id.get(),
            email: user.email.clone(),
            nickname: user.nickname.clone(),
            exp,
        }
    }

    pub fn user_id(&self) -> UserId {
        UserId(self.user_id)
    }

    /// Structural checks after the signature has been verified
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        let message = if self.user_id <= 0 {
            "user_id must be positive"
        } else if self.email.is_empty() {
            "email cannot be empty"
        } else if self.nickname.is_empty() {
            "nickname cannot be empty"
        } else {
            return Ok(());
        };

        Err(AuthError::InvalidToken {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Trust-but-verify: the snapshot must equal the current stored record
    pub fn matches(&self, user: &User) -> bool {
        self.user_id == user.id.get() && self.email == user.email && self.nickname == user.nickname
    }
}
