use serde::{Deserialize, Deserializer, Serialize};

/// Leaderboard ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardSort {
    /// Highest score first
    Score,
    /// Nickname, lexicographic ascending
    Nickname,
    /// Identifier ascending (registration order)
    #[default]
    Id,
}

impl LeaderboardSort {
    /// Unrecognized keys fall back to `Id`; an unknown sort is not an error.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "score" => Self::Score,
            "nickname" => Self::Nickname,
            _ => Self::Id,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Nickname => "nickname",
            Self::Id => "id",
        }
    }
}

impl<'de> Deserialize<'de> for LeaderboardSort {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Ok(Self::from_key(&key))
    }
}

impl std::fmt::Display for LeaderboardSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
