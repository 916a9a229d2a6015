use crate::LeaderboardEntryDto;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub sort_by: String,
    pub page: u32,
    /// 0 when the whole board was returned
    pub size: u32,
    pub users: Vec<LeaderboardEntryDto>,
}
