use pl_core::NewUser;

use serde::Deserialize;

/// Missing fields deserialize as empty so validation can name them
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub nickname: String,
    pub email: String,
}

impl From<RegisterRequest> for NewUser {
    fn from(request: RegisterRequest) -> Self {
        NewUser::new(request.nickname, request.email)
    }
}
