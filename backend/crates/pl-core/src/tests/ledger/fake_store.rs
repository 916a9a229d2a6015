//! In-process `UserStore` used to exercise the service without SQLite.

use crate::{
    LeaderboardSort, NewUser, PageRequest, ReferralClaim, ReferralOutcome, StoreError,
    StoreResult, User, UserId, UserStore,
};

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;

#[derive(Default)]
pub(crate) struct FakeStore {
    users: Mutex<BTreeMap<i64, User>>,
    failing: AtomicBool,
}

impl FakeStore {
    pub(crate) fn user(&self, id: UserId) -> Option<User> {
        self.users.lock().unwrap().get(&id.0).cloned()
    }

    pub(crate) fn row_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub(crate) fn set_score(&self, id: UserId, score: i64) {
        if let Some(user) = self.users.lock().unwrap().get_mut(&id.0) {
            user.score = score;
        }
    }

    pub(crate) fn fail_next_calls(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check_backend(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::backend("simulated outage"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for FakeStore {
    async fn insert_user(&self, user: &NewUser) -> StoreResult<User> {
        self.check_backend()?;
        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users
            .values()
            .find(|u| u.nickname == user.nickname && u.email == user.email)
        {
            return Ok(existing.clone());
        }
        let id = users.keys().next_back().copied().unwrap_or(0) + 1;
        let stored = User {
            id: UserId(id),
            nickname: user.nickname.clone(),
            email: user.email.clone(),
            score: 0,
            registered: Utc::now(),
            invited_by: None,
        };
        users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_user(&self, id: UserId) -> StoreResult<Option<User>> {
        self.check_backend()?;
        Ok(self.user(id))
    }

    async fn list_users(
        &self,
        sort: LeaderboardSort,
        page: PageRequest,
    ) -> StoreResult<Vec<User>> {
        self.check_backend()?;
        let mut users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
        match sort {
            LeaderboardSort::Score => {
                users.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)))
            }
            LeaderboardSort::Nickname => {
                users.sort_by(|a, b| a.nickname.cmp(&b.nickname).then(a.id.cmp(&b.id)))
            }
            LeaderboardSort::Id => users.sort_by_key(|u| u.id),
        }
        Ok(match page.limit_offset() {
            Some((limit, offset)) => users
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect(),
            None => users,
        })
    }

    async fn add_points(&self, id: UserId, points: i64) -> StoreResult<bool> {
        self.check_backend()?;
        let mut users = self.users.lock().unwrap();
        Ok(match users.get_mut(&id.0) {
            Some(user) => {
                user.score += points;
                true
            }
            None => false,
        })
    }

    async fn claim_referral(&self, claim: &ReferralClaim) -> StoreResult<ReferralOutcome> {
        self.check_backend()?;
        let mut users = self.users.lock().unwrap();
        if !users.contains_key(&claim.user_id.0) {
            return Ok(ReferralOutcome::UserNotFound);
        }
        if !users.contains_key(&claim.referrer_id.0) {
            return Ok(ReferralOutcome::ReferrerNotFound);
        }
        let Some(user) = users.get_mut(&claim.user_id.0) else {
            return Ok(ReferralOutcome::UserNotFound);
        };
        if user.invited_by.is_some() {
            return Ok(ReferralOutcome::AlreadyInvited);
        }
        user.invited_by = Some(claim.referrer_id);
        user.score += claim.invitee_points;
        if let Some(referrer) = users.get_mut(&claim.referrer_id.0) {
            referrer.score += claim.referrer_points;
        }
        Ok(ReferralOutcome::Claimed)
    }
}
