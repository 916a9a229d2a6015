use crate::{
    BEING_INVITED, ConfigError, ConfigErrorResult, DEFAULT_REWARDS, INVITING_A_FRIEND,
    MAX_REWARD_POINTS,
};

use std::collections::BTreeMap;

use serde::Deserialize;

/// Task name to points. A `[rewards]` table replaces the defaults entirely.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RewardsConfig(pub BTreeMap<String, i64>);

impl Default for RewardsConfig {
    fn default() -> Self {
        Self(
            DEFAULT_REWARDS
                .iter()
                .map(|(task, points)| (task.to_string(), *points))
                .collect(),
        )
    }
}

impl RewardsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some((task, points)) = self
            .0
            .iter()
            .find(|(_, points)| !(0..=MAX_REWARD_POINTS).contains(*points))
        {
            return Err(ConfigError::rewards(format!(
                "rewards.{} must be between 0 and {}, got {}",
                task, MAX_REWARD_POINTS, points
            )));
        }

        // A zero entry is dropped from the catalog, which would read as an unknown task
        for required in [INVITING_A_FRIEND, BEING_INVITED] {
            match self.0.get(required) {
                Some(points) if *points > 0 => {}
                Some(_) => {
                    return Err(ConfigError::rewards(format!(
                        "rewards.{} must be positive",
                        required
                    )));
                }
                None => {
                    return Err(ConfigError::rewards(format!(
                        "rewards.{} is required for referrals",
                        required
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(task, points)| (task.as_str(), *points))
    }
}
