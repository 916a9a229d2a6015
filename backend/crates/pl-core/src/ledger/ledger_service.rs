//! Point awarding, referral binding and leaderboard reads.
//!
//! The service holds no mutable state of its own. Every invariant that must
//! survive concurrent requests (atomic score increments, the one-time
//! referral binding) is delegated to the `UserStore`.

use crate::{
    BEING_INVITED, INVITING_A_FRIEND, LeaderboardSort, LedgerError, LedgerResult, NewUser,
    PageRequest, ReferralClaim, ReferralOutcome, RewardCatalog, User, UserId, UserStore,
};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info, warn};

#[derive(Clone)]
pub struct LedgerService {
    store: Arc<dyn UserStore>,
    catalog: Arc<RewardCatalog>,
}

impl LedgerService {
    pub fn new(store: Arc<dyn UserStore>, catalog: Arc<RewardCatalog>) -> Self {
        Self { store, catalog }
    }

    pub fn catalog(&self) -> &RewardCatalog {
        &self.catalog
    }

    /// Register a user. Re-registering an existing (nickname, email) pair
    /// returns the existing row.
    pub async fn add_user(&self, user: NewUser) -> LedgerResult<User> {
        let user = user.normalized();
        if let Err(e) = user.validate() {
            warn!("Rejected registration for '{}': {}", user.nickname, e);
            return Err(e.into());
        }

        let stored = self.store.insert_user(&user).await?;
        info!("Registered user {} ({})", stored.id, stored.nickname);
        Ok(stored)
    }

    pub async fn status(&self, id: UserId) -> LedgerResult<User> {
        debug!("Fetching status for user {}", id);
        self.store
            .get_user(id)
            .await?
            .ok_or_else(|| LedgerError::NotFound {
                user_id: id,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn leaderboard(
        &self,
        sort: LeaderboardSort,
        page: PageRequest,
    ) -> LedgerResult<Vec<User>> {
        debug!(
            "Leaderboard sort={} page={} size={}",
            sort,
            page.page(),
            page.size()
        );
        Ok(self.store.list_users(sort, page).await?)
    }

    /// Credit the reward for `task` to the user and return the points awarded.
    ///
    /// Completions are not tracked, so completing the same task twice pays
    /// twice.
    pub async fn task_complete(&self, id: UserId, task: &str) -> LedgerResult<i64> {
        let points = self.reward_for(task)?;

        if !self.store.add_points(id, points).await? {
            return Err(LedgerError::NotFound {
                user_id: id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!("User {} completed '{}' for {} points", id, task, points);
        Ok(points)
    }

    /// Record that `user_id` was invited by `referrer_id`.
    ///
    /// The claim, the referrer existence check and both awards happen in a
    /// single store transaction; a failed claim awards nothing. A referral
    /// reward missing from the catalog pays 0 but the referrer is still bound.
    pub async fn invited_by(&self, user_id: UserId, referrer_id: UserId) -> LedgerResult<()> {
        if user_id == referrer_id {
            warn!("User {} tried to refer themselves", user_id);
            return Err(LedgerError::SelfReferral {
                user_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // The invitee is paid `being_invited`, the referrer `inviting_a_friend`
        let claim = ReferralClaim {
            user_id,
            referrer_id,
            invitee_points: self.catalog.lookup(BEING_INVITED).unwrap_or(0),
            referrer_points: self.catalog.lookup(INVITING_A_FRIEND).unwrap_or(0),
        };

        match self.store.claim_referral(&claim).await? {
            ReferralOutcome::Claimed => {
                info!(
                    "User {} invited by {} (+{} / +{})",
                    user_id, referrer_id, claim.invitee_points, claim.referrer_points
                );
                Ok(())
            }
            ReferralOutcome::UserNotFound => Err(LedgerError::NotFound {
                user_id,
                location: ErrorLocation::from(Location::caller()),
            }),
            ReferralOutcome::ReferrerNotFound => {
                warn!("User {} named unknown referrer {}", user_id, referrer_id);
                Err(LedgerError::NotFound {
                    user_id: referrer_id,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            ReferralOutcome::AlreadyInvited => {
                warn!("User {} already has a referrer", user_id);
                Err(LedgerError::AlreadyInvited {
                    user_id,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    #[track_caller]
    fn reward_for(&self, task: &str) -> LedgerResult<i64> {
        self.catalog.lookup(task).ok_or_else(|| {
            warn!("Unknown task '{}'", task);
            LedgerError::UnknownTask {
                task: task.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
