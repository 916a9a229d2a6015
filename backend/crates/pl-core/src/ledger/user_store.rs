//! Persistence seam for the ledger.
//!
//! Implementations must be safe to call concurrently from many requests. The
//! store is the only synchronization point: `claim_referral` must be
//! linearizable per invited user, and `add_points` must be a single atomic
//! increment rather than a read-modify-write.

use crate::{LeaderboardSort, NewUser, PageRequest, StoreResult, User, UserId};

use async_trait::async_trait;

/// One referral claim with the points both parties receive on success
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferralClaim {
    /// The user who was invited
    pub user_id: UserId,
    /// The user who did the inviting
    pub referrer_id: UserId,
    /// Points credited to `user_id`
    pub invitee_points: i64,
    /// Points credited to `referrer_id`
    pub referrer_points: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferralOutcome {
    /// Referrer bound and both awards applied
    Claimed,
    /// The invited user does not exist
    UserNotFound,
    /// The referrer does not exist
    ReferrerNotFound,
    /// `invited_by` was already set; nothing changed
    AlreadyInvited,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert if no row with the same (nickname, email) exists, then return
    /// the stored row. A duplicate pair is not an error.
    async fn insert_user(&self, user: &NewUser) -> StoreResult<User>;

    async fn get_user(&self, id: UserId) -> StoreResult<Option<User>>;

    async fn list_users(
        &self,
        sort: LeaderboardSort,
        page: PageRequest,
    ) -> StoreResult<Vec<User>>;

    /// Atomically add `points` to the user's score. Returns `false` if the
    /// user does not exist.
    async fn add_points(&self, id: UserId, points: i64) -> StoreResult<bool>;

    /// Bind `claim.referrer_id` as the inviter of `claim.user_id` only if no
    /// inviter is set yet, and credit both awards, all in one transaction.
    async fn claim_referral(&self, claim: &ReferralClaim) -> StoreResult<ReferralOutcome>;
}
