use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] pl_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] pl_db::DbError),

    #[error("Reward catalog error: {0}")]
    Catalog(#[from] pl_core::CoreError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
