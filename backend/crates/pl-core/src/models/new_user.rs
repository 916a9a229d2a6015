use crate::Result as CoreErrorResult;
use crate::validation::{validate_email, validate_nickname};

use serde::Deserialize;

/// Registration input: the (nickname, email) pair that identifies a user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub nickname: String,
    pub email: String,
}

impl NewUser {
    pub fn new(nickname: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            email: email.into(),
        }
        .normalized()
    }

    /// Surrounding whitespace is not part of a registration's identity
    pub fn normalized(self) -> Self {
        Self {
            nickname: self.nickname.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }

    /// Nickname is checked first so an empty form reports the missing nickname
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        validate_nickname(&self.nickname)?;
        validate_email(&self.email)?;
        Ok(())
    }
}
