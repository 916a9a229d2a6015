use pl_core::User;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full user record, as returned to the user themselves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub nickname: String,
    pub email: String,
    pub score: i64,
    pub registered: DateTime<Utc>,
    /// `null` until a referrer is bound
    pub invited_by: Option<i64>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.get(),
            nickname: user.nickname,
            email: user.email,
            score: user.score,
            registered: user.registered,
            invited_by: user.invited_by.map(|id| id.get()),
        }
    }
}
