//! This module is used for tests.
//!
//! [`CounterEnv`] emits observations counting up from 1, so that the position of
//! every observation in a sequence can be read from its values: with
//! `obs_dim = 4`, the initial observation is `[1, 2, 3, 4]`, the one after the
//! first step is `[5, 6, 7, 8]`, and so on.
use crate::{
    error::WrapError,
    record::{Record, RecordValue},
    ArrayObs, BoxSpace, Discrete, DiscreteAct, Env, Space, Step,
};
use anyhow::Result;
use ndarray::{Array1, ArrayD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors of [`CounterEnv`].
#[derive(Error, Debug, PartialEq)]
pub enum DummyEnvError {
    /// The environment has been closed.
    #[error("environment is closed")]
    Closed,

    /// The action is not in the action space.
    #[error("invalid action: {0}")]
    InvalidAction(i64),
}

/// Configuration of [`CounterEnv`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterEnvConfig {
    /// Length of observation vectors.
    pub obs_dim: usize,

    /// The number of actions.
    pub n_actions: i64,

    /// Episodes terminate after this number of steps.
    pub terminate_at: Option<usize>,

    /// Episodes are truncated after this number of steps.
    pub truncate_at: Option<usize>,
}

impl Default for CounterEnvConfig {
    fn default() -> Self {
        Self {
            obs_dim: 4,
            n_actions: 4,
            terminate_at: None,
            truncate_at: None,
        }
    }
}

impl CounterEnvConfig {
    /// Sets the length of observation vectors.
    pub fn obs_dim(mut self, v: usize) -> Self {
        self.obs_dim = v;
        self
    }

    /// Sets the number of actions.
    pub fn n_actions(mut self, v: i64) -> Self {
        self.n_actions = v;
        self
    }

    /// Sets the step at which episodes terminate.
    pub fn terminate_at(mut self, v: Option<usize>) -> Self {
        self.terminate_at = v;
        self
    }

    /// Sets the step at which episodes are truncated.
    pub fn truncate_at(mut self, v: Option<usize>) -> Self {
        self.truncate_at = v;
        self
    }
}

/// An environment emitting counting observations.
///
/// The reward of the `i`-th step of an episode is `i - 2`, so it takes negative,
/// zero and positive values. The information of each step is a [`Record`] holding
/// the step count (`"count"`) and the received action (`"action"`).
pub struct CounterEnv {
    config: CounterEnvConfig,
    count: usize,
    closed: bool,
    observation_space: BoxSpace<f32>,
    action_space: Discrete,
}

impl CounterEnv {
    fn obs(&self) -> ArrayObs<f32> {
        let dim = self.config.obs_dim;
        let start = (self.count * dim + 1) as f32;
        let array: ArrayD<f32> = Array1::from_iter((0..dim).map(|i| start + i as f32)).into_dyn();
        ArrayObs(array)
    }
}

impl Env for CounterEnv {
    type Config = CounterEnvConfig;
    type Obs = ArrayObs<f32>;
    type Act = DiscreteAct;
    type Info = Record;
    type ObsSpace = BoxSpace<f32>;
    type ActSpace = Discrete;

    /// Fails with [`WrapError::InvalidConfiguration`] if `n_actions` is not positive.
    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        if config.n_actions < 1 {
            return Err(WrapError::InvalidConfiguration(format!(
                "n_actions must be positive, got {}",
                config.n_actions
            ))
            .into());
        }
        Ok(Self {
            config: config.clone(),
            count: 0,
            closed: false,
            observation_space: BoxSpace::new(0.0, f32::MAX, vec![config.obs_dim]),
            action_space: Discrete::new(config.n_actions),
        })
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        if self.closed {
            return Err(DummyEnvError::Closed.into());
        }
        self.count = 0;
        Ok(self.obs())
    }

    fn step(&mut self, act: &Self::Act) -> Result<(Step<Self>, Record)> {
        if self.closed {
            return Err(DummyEnvError::Closed.into());
        }
        if !self.action_space.contains(act) {
            return Err(DummyEnvError::InvalidAction(act.0).into());
        }

        self.count += 1;
        let reward = self.count as f32 - 2.0;
        let is_terminated = self.config.terminate_at == Some(self.count);
        let is_truncated = self.config.truncate_at == Some(self.count);
        let info = Record::from_slice(&[
            ("count", RecordValue::Scalar(self.count as f32)),
            ("action", RecordValue::Scalar(act.0 as f32)),
        ]);
        let step = Step::new(self.obs(), reward, is_terminated, is_truncated, info);

        Ok((step, Record::from_scalar("counter", self.count as f32)))
    }

    fn observation_space(&self) -> &Self::ObsSpace {
        &self.observation_space
    }

    fn action_space(&self) -> &Self::ActSpace {
        &self.action_space
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_invalid_n_actions() {
        for n_actions in [0i64, -3].iter() {
            let config = CounterEnvConfig::default().n_actions(*n_actions);
            let err = CounterEnv::build(&config, 0).err().expect("build must fail");
            assert!(matches!(
                err.downcast_ref::<WrapError>(),
                Some(WrapError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_counting_obs() -> Result<()> {
        let mut env = CounterEnv::build(&CounterEnvConfig::default().obs_dim(2), 0)?;
        assert_eq!(env.reset()?.0.into_raw_vec(), vec![1.0, 2.0]);
        let (step, record) = env.step(&DiscreteAct(0))?;
        assert_eq!(step.obs.0.into_raw_vec(), vec![3.0, 4.0]);
        assert_eq!(step.reward, -1.0);
        assert_eq!(record.get_scalar("counter")?, 1.0);
        Ok(())
    }
}
