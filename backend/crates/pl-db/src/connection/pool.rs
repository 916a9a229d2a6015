use crate::{MIGRATOR, Result as DbErrorResult};

use std::path::PathBuf;
use std::time::Duration;

use log::info;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

const IN_MEMORY: &str = ":memory:";

/// Connection pool parameters
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub path: PathBuf,
    pub max_connections: u32,
    pub busy_timeout: Duration,
}

impl PoolSettings {
    pub fn file(path: impl Into<PathBuf>, max_connections: u32, busy_timeout: Duration) -> Self {
        Self {
            path: path.into(),
            max_connections,
            busy_timeout,
        }
    }

    /// Private in-memory database. Limited to one connection because every
    /// new connection would open a separate, empty database.
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::from(IN_MEMORY),
            max_connections: 1,
            busy_timeout: Duration::from_secs(5),
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.path.as_os_str() == IN_MEMORY
    }
}

/// Open the pool. File databases use WAL so readers never block the writer.
pub async fn connect(settings: &PoolSettings) -> DbErrorResult<SqlitePool> {
    let mut options = SqliteConnectOptions::new()
        .filename(&settings.path)
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(settings.busy_timeout);

    let mut pool_options = SqlitePoolOptions::new();
    let max_connections = if settings.is_in_memory() {
        // The database lives and dies with its only connection.
        pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        1
    } else {
        options = options
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);
        settings.max_connections
    };

    let pool = pool_options
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    info!(
        "Database pool ready: {} (max {} connections)",
        settings.path.display(),
        max_connections
    );
    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    info!("Running database migrations...");
    MIGRATOR.run(pool).await?;
    info!("Migrations complete");
    Ok(())
}
