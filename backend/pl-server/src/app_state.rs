use pl_auth::TokenService;
use pl_core::LedgerService;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state. Every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Kept for readiness probes; handlers go through `ledger`
    pub pool: SqlitePool,
    pub ledger: LedgerService,
    pub tokens: Arc<TokenService>,
}
