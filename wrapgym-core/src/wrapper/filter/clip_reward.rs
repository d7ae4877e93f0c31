//! Clipping of rewards.
use super::RewardFilter;
use crate::{
    error::WrapError,
    record::{Record, RecordValue},
};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Configuration of [`ClipReward`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipRewardConfig {
    /// Lower bound of rewards.
    pub low: f32,

    /// Upper bound of rewards.
    pub high: f32,
}

impl Default for ClipRewardConfig {
    fn default() -> Self {
        Self { low: 0.0, high: 1.0 }
    }
}

impl ClipRewardConfig {
    /// Sets the bounds of rewards.
    pub fn bounds(mut self, low: f32, high: f32) -> Self {
        self.low = low;
        self.high = high;
        self
    }
}

/// Clamps rewards into `[low, high]`.
///
/// The reward before clipping is recorded as `"raw_reward"`.
#[derive(Debug, Clone)]
pub struct ClipReward {
    low: f32,
    high: f32,
}

impl RewardFilter for ClipReward {
    type Config = ClipRewardConfig;

    fn build(config: &Self::Config) -> Result<Self> {
        if !(config.low <= config.high) {
            return Err(WrapError::InvalidConfiguration(format!(
                "reward bounds must satisfy low <= high, got [{}, {}]",
                config.low, config.high
            ))
            .into());
        }
        Ok(Self {
            low: config.low,
            high: config.high,
        })
    }

    fn filt(&mut self, reward: f32) -> (f32, Record) {
        let record = Record::from_slice(&[("raw_reward", RecordValue::Scalar(reward))]);
        (reward.max(self.low).min(self.high), record)
    }
}
