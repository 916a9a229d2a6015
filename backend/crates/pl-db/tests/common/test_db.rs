use pl_core::{NewUser, User};
use pl_db::{PoolSettings, UserRepository, connect, run_migrations};

use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;

/// Fresh in-memory database with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    let pool = connect(&PoolSettings::in_memory())
        .await
        .expect("Failed to create test pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// File-backed database with several connections, for contention tests
pub async fn create_file_pool(dir: &Path, max_connections: u32) -> SqlitePool {
    let settings = PoolSettings::file(
        dir.join("ledger.db"),
        max_connections,
        Duration::from_secs(10),
    );
    let pool = connect(&settings)
        .await
        .expect("Failed to create file pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn seed_user(repo: &UserRepository, nickname: &str) -> User {
    repo.insert(&NewUser::new(nickname, format!("{nickname}@example.com")))
        .await
        .expect("Failed to seed user")
}
