pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{PoolSettings, connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
