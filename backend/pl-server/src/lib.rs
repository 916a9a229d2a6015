pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_user::AuthenticatedUser,
    users::{
        leaderboard_entry_dto::LeaderboardEntryDto,
        leaderboard_params::LeaderboardParams,
        leaderboard_response::LeaderboardResponse,
        login_response::LoginResponse,
        referrer_request::ReferrerRequest,
        register_request::RegisterRequest,
        task_complete_request::TaskCompleteRequest,
        task_complete_response::TaskCompleteResponse,
        user_dto::UserDto,
        user_response::UserResponse,
        users::{complete_task, leaderboard, login, register, set_referrer, status},
    },
};
pub use app_state::AppState;
pub use routes::build_router;
