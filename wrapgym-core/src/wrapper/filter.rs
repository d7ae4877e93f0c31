//! Filters applied by [`TransformEnv`](super::TransformEnv).
//!
//! A filter transforms one aspect of the interaction: an observation, a reward or
//! an action. Observation and action filters also transform the corresponding
//! space, so the wrapped environment declares the spaces it actually uses.
mod clip_reward;
mod remap_act;
mod scale_obs;
use crate::{record::Record, Space};
use anyhow::Result;
pub use clip_reward::{ClipReward, ClipRewardConfig};
pub use remap_act::{RemapAct, RemapActConfig};
pub use scale_obs::{ScaleObs, ScaleObsConfig};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Transforms observations of space `S`.
pub trait ObsFilter<S: Space>: Sized {
    /// Configuration.
    type Config: Clone + Default + Serialize + DeserializeOwned;

    /// Space of filtered observations.
    type Space: Space;

    /// Build filter.
    fn build(config: &Self::Config) -> Result<Self>;

    /// Returns the space of filtered observations.
    fn filt_space(&self, space: &S) -> Self::Space;

    /// Filters an observation.
    fn filt(&mut self, obs: S::Item) -> (<Self::Space as Space>::Item, Record);

    /// Called when resetting the environment, before the initial observation is filtered.
    ///
    /// This method is useful for stateful filters.
    fn reset(&mut self) {}

    /// Returns default configuration.
    fn default_config() -> Self::Config {
        Self::Config::default()
    }
}

/// Transforms rewards.
pub trait RewardFilter: Sized {
    /// Configuration.
    type Config: Clone + Default + Serialize + DeserializeOwned;

    /// Build filter.
    fn build(config: &Self::Config) -> Result<Self>;

    /// Filters a reward.
    fn filt(&mut self, reward: f32) -> (f32, Record);

    /// Called when resetting the environment.
    fn reset(&mut self) {}

    /// Returns default configuration.
    fn default_config() -> Self::Config {
        Self::Config::default()
    }
}

/// Transforms actions into actions of space `S`.
///
/// The filter maps the action space `S` of the inner environment to the action
/// space exposed by the wrapper, and actions taken in the exposed space back to `S`.
pub trait ActFilter<S: Space>: Sized {
    /// Configuration.
    type Config: Clone + Default + Serialize + DeserializeOwned;

    /// Space of actions given to the filter.
    type Space: Space;

    /// Build filter.
    fn build(config: &Self::Config) -> Result<Self>;

    /// Returns the space of actions given to the filter.
    fn filt_space(&self, space: &S) -> Self::Space;

    /// Converts an action into an action of the inner environment.
    fn filt(&mut self, act: &<Self::Space as Space>::Item) -> (S::Item, Record);

    /// Called when resetting the environment.
    fn reset(&mut self) {}

    /// Returns default configuration.
    fn default_config() -> Self::Config {
        Self::Config::default()
    }
}

/// Configuration of the raw filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFilterConfig;

/// An observation filter without any processing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawObs;

impl<S: Space> ObsFilter<S> for RawObs {
    type Config = RawFilterConfig;
    type Space = S;

    fn build(_config: &Self::Config) -> Result<Self> {
        Ok(Self)
    }

    fn filt_space(&self, space: &S) -> S {
        space.clone()
    }

    fn filt(&mut self, obs: S::Item) -> (S::Item, Record) {
        (obs, Record::empty())
    }
}

/// A reward filter without any processing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawReward;

impl RewardFilter for RawReward {
    type Config = RawFilterConfig;

    fn build(_config: &Self::Config) -> Result<Self> {
        Ok(Self)
    }

    fn filt(&mut self, reward: f32) -> (f32, Record) {
        (reward, Record::empty())
    }
}

/// An action filter without any processing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawAct;

impl<S: Space> ActFilter<S> for RawAct {
    type Config = RawFilterConfig;
    type Space = S;

    fn build(_config: &Self::Config) -> Result<Self> {
        Ok(Self)
    }

    fn filt_space(&self, space: &S) -> S {
        space.clone()
    }

    fn filt(&mut self, act: &S::Item) -> (S::Item, Record) {
        (act.clone(), Record::empty())
    }
}
