//! An environment transforming observations, rewards and actions of another.
mod config;
use super::{ActFilter, ObsFilter, RewardFilter};
use crate::{record::Record, Act, Env, Obs, Space, Step};
use anyhow::Result;
pub use config::TransformEnvConfig;
use log::trace;

/// Applies filters around an inner environment.
///
/// The filters are applied in a fixed order. In [`Env::step`]:
///
/// 1. the action filter converts the given action into an action of the inner environment,
/// 2. the inner environment takes a step,
/// 3. the observation filter transforms the observation,
/// 4. the reward filter transforms the reward.
///
/// In [`Env::reset`], the filters are reset, then the initial observation of the
/// inner environment goes through the observation filter.
///
/// Termination flags and information pass through unchanged. The returned record
/// merges the records of the inner environment and of the filters.
pub struct TransformEnv<E, OF, RF, AF>
where
    E: Env,
    OF: ObsFilter<E::ObsSpace>,
    RF: RewardFilter,
    AF: ActFilter<E::ActSpace>,
{
    env: E,
    obs_filter: OF,
    reward_filter: RF,
    act_filter: AF,
    observation_space: OF::Space,
    action_space: AF::Space,
}

impl<E, OF, RF, AF> TransformEnv<E, OF, RF, AF>
where
    E: Env,
    OF: ObsFilter<E::ObsSpace>,
    RF: RewardFilter,
    AF: ActFilter<E::ActSpace>,
{
    /// Wraps `env` with the given filters.
    pub fn new(env: E, obs_filter: OF, reward_filter: RF, act_filter: AF) -> Self {
        let observation_space = obs_filter.filt_space(env.observation_space());
        let action_space = act_filter.filt_space(env.action_space());
        Self {
            env,
            obs_filter,
            reward_filter,
            act_filter,
            observation_space,
            action_space,
        }
    }

    /// Returns a reference to the inner environment.
    pub fn inner(&self) -> &E {
        &self.env
    }

    /// Returns a mutable reference to the inner environment.
    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.env
    }

    /// Unwraps the inner environment.
    pub fn into_inner(self) -> E {
        self.env
    }
}

impl<E, OF, RF, AF> Env for TransformEnv<E, OF, RF, AF>
where
    E: Env,
    OF: ObsFilter<E::ObsSpace>,
    RF: RewardFilter,
    AF: ActFilter<E::ActSpace>,
    <OF::Space as Space>::Item: Obs,
    <AF::Space as Space>::Item: Act,
{
    type Config = TransformEnvConfig<E::Config, OF::Config, RF::Config, AF::Config>;
    type Obs = <OF::Space as Space>::Item;
    type Act = <AF::Space as Space>::Item;
    type Info = E::Info;
    type ObsSpace = OF::Space;
    type ActSpace = AF::Space;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let env = E::build(&config.env_config, seed)?;
        let obs_filter = OF::build(&config.obs_filter_config)?;
        let reward_filter = RF::build(&config.reward_filter_config)?;
        let act_filter = AF::build(&config.act_filter_config)?;
        Ok(Self::new(env, obs_filter, reward_filter, act_filter))
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        trace!("TransformEnv::reset()");
        self.act_filter.reset();
        self.reward_filter.reset();
        self.obs_filter.reset();
        let obs = self.env.reset()?;
        let (obs, _) = self.obs_filter.filt(obs);
        Ok(obs)
    }

    fn step(&mut self, act: &Self::Act) -> Result<(Step<Self>, Record)> {
        trace!("TransformEnv::step()");
        let (act, record_a) = self.act_filter.filt(act);
        let (step, record) = self.env.step(&act)?;
        let (obs, record_o) = self.obs_filter.filt(step.obs);
        let (reward, record_r) = self.reward_filter.filt(step.reward);
        let step = Step::new(
            obs,
            reward,
            step.is_terminated,
            step.is_truncated,
            step.info,
        );
        let record = record.merge(record_a).merge(record_o).merge(record_r);
        Ok((step, record))
    }

    fn observation_space(&self) -> &Self::ObsSpace {
        &self.observation_space
    }

    fn action_space(&self) -> &Self::ActSpace {
        &self.action_space
    }

    fn close(&mut self) -> Result<()> {
        self.env.close()
    }
}
