pub mod error;
pub mod ledger;
pub mod models;
pub mod reward_catalog;
pub mod validation;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use ledger::ledger_error::{LedgerError, Result as LedgerResult};
pub use ledger::ledger_service::LedgerService;
pub use ledger::store_error::{Result as StoreResult, StoreError};
pub use ledger::user_store::{ReferralClaim, ReferralOutcome, UserStore};
pub use models::leaderboard_sort::LeaderboardSort;
pub use models::new_user::NewUser;
pub use models::page_request::PageRequest;
pub use models::user::User;
pub use models::user_id::UserId;
pub use reward_catalog::{BEING_INVITED, INVITING_A_FRIEND, RewardCatalog};

#[cfg(test)]
mod tests;
