pub mod leaderboard_entry_dto;
pub mod leaderboard_params;
pub mod leaderboard_response;
pub mod login_response;
pub mod referrer_request;
pub mod register_request;
pub mod task_complete_request;
pub mod task_complete_response;
pub mod user_dto;
pub mod user_response;
#[allow(clippy::module_inception)]
pub mod users;
