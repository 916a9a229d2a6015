use crate::UserDto;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskCompleteResponse {
    pub task: String,
    pub points: i64,
    pub user: UserDto,
}
