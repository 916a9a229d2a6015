pub mod leaderboard_sort;
pub mod new_user;
pub mod page_request;
pub mod user;
pub mod user_id;
