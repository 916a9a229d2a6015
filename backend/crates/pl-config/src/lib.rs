mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod rewards_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rewards_config::RewardsConfig;
pub use server_config::ServerConfig;


// Config directory
const CONFIG_DIR_ENV: &str = "PL_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".pl";
const CONFIG_FILENAME: &str = "config.toml";

// Server
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// Database
const DEFAULT_DATABASE_FILENAME: &str = "ledger.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 8;
const MIN_DB_MAX_CONNECTIONS: u32 = 1;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;

// Auth
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
const MIN_TOKEN_TTL_SECS: u64 = 60;
const MAX_TOKEN_TTL_SECS: u64 = 86_400;
const MIN_JWT_SECRET_LENGTH: usize = 32;

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

// Rewards
const INVITING_A_FRIEND: &str = "inviting_a_friend";
const BEING_INVITED: &str = "being_invited";
const MAX_REWARD_POINTS: i64 = 1_000_000;
const DEFAULT_REWARDS: &[(&str, i64)] = &[
    ("10k_daily_steps", 50),
    ("wake_in_time", 20),
    ("8h_sleep", 30),
    ("10_pushups", 10),
    ("morning_exercise", 25),
    (INVITING_A_FRIEND, 100),
    (BEING_INVITED, 50),
];
