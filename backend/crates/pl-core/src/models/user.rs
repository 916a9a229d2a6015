use crate::UserId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered participant and their point balance.
///
/// `invited_by` is `None` until a referral claim succeeds and never changes
/// afterwards; the store enforces this with a conditional update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub nickname: String,
    pub email: String,
    pub score: i64,
    pub registered: DateTime<Utc>,
    pub invited_by: Option<UserId>,
}
