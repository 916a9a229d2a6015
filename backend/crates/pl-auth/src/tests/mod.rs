
use pl_core::{User, UserId};

use chrono::Utc;

pub(crate) const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) fn test_user(id: i64, nickname: &str) -> User {
    User {
        id: UserId(id),
        nickname: nickname.to_string(),
        email: format!("{nickname}@example.com"),
        score: 0,
        registered: Utc::now(),
        invited_by: None,
    }
}
