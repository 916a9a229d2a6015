//! Task-name to point-value table.
//!
//! Built once at startup from the `[rewards]` configuration table and shared
//! read-only for the lifetime of the process. Entries with a value of 0 are
//! dropped on construction, so "worth nothing" and "no such task" look the
//! same to callers.

use crate::{CoreError, Result as CoreErrorResult};

use std::collections::BTreeMap;
use std::panic::Location;

use error_location::ErrorLocation;

/// Reward for the user who brought a friend in
pub const INVITING_A_FRIEND: &str = "inviting_a_friend";

/// Reward for the user who joined through a referral
pub const BEING_INVITED: &str = "being_invited";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewardCatalog {
    rewards: BTreeMap<String, i64>,
}

impl RewardCatalog {
    /// Build the catalog, rejecting negative point values.
    #[track_caller]
    pub fn new<I, K>(entries: I) -> CoreErrorResult<Self>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        let mut rewards = BTreeMap::new();
        for (task, points) in entries {
            let task = task.into();
            if points < 0 {
                return Err(CoreError::InvalidReward {
                    task,
                    message: format!("points must be non-negative, got {}", points),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            if points > 0 {
                rewards.insert(task, points);
            }
        }
        Ok(Self { rewards })
    }

    /// Points for `task`, or `None` if the task is unknown or worth nothing
    pub fn lookup(&self, task: &str) -> Option<i64> {
        self.rewards.get(task).copied()
    }

    pub fn contains(&self, task: &str) -> bool {
        self.rewards.contains_key(task)
    }

    pub fn tasks(&self) -> impl Iterator<Item = (&str, i64)> {
        self.rewards.iter().map(|(task, points)| (task.as_str(), *points))
    }

    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }
}
