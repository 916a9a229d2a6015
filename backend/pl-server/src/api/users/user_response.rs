use crate::UserDto;

use serde::{Deserialize, Serialize};

/// Single user response
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserDto,
}
