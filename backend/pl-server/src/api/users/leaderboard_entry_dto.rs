use pl_core::User;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public leaderboard row. Email and referral data are never exposed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntryDto {
    pub id: i64,
    pub nickname: String,
    pub score: i64,
    pub registered: DateTime<Utc>,
}

impl From<User> for LeaderboardEntryDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.get(),
            nickname: user.nickname,
            score: user.score,
            registered: user.registered,
        }
    }
}
