//! A wrapper stacking the most recent observations.
mod config;
mod history;
use crate::{error::WrapError, record::Record, ArrayObs, BoxSpace, Element, Env, Step};
use anyhow::Result;
pub use config::FrameStackConfig;
use history::FrameHistory;
use log::{debug, trace};
use std::convert::TryFrom;

/// Stacks the last `n_stack` observations of the inner environment.
///
/// Observations of the wrapped environment have shape `(n_stack, *base_shape)`,
/// where `base_shape` is the observation shape of the inner environment. Frames
/// are ordered oldest first. On reset, the initial observation is replicated into
/// every slot, so the stacked shape is the same throughout an episode. Before the
/// first reset, every slot holds a zero-valued frame.
///
/// Rewards, termination flags, information and records of the inner environment
/// are passed through unchanged, as are errors.
pub struct FrameStack<E, T>
where
    E: Env<Obs = ArrayObs<T>, ObsSpace = BoxSpace<T>>,
    T: Element,
{
    env: E,
    history: FrameHistory<T>,
    observation_space: BoxSpace<T>,
}

impl<E, T> FrameStack<E, T>
where
    E: Env<Obs = ArrayObs<T>, ObsSpace = BoxSpace<T>>,
    T: Element,
{
    /// Wraps `env`, stacking the last `n_stack` observations.
    ///
    /// Fails with [`WrapError::InvalidConfiguration`] if `n_stack` is not positive,
    /// or if `n_stack` frames of the observation shape do not fit in memory.
    pub fn new(env: E, n_stack: i64) -> Result<Self> {
        if n_stack < 1 {
            return Err(WrapError::InvalidConfiguration(format!(
                "n_stack must be a positive integer, got {}",
                n_stack
            ))
            .into());
        }

        let base = env.observation_space();
        // `None` if the size of the history buffer in bytes overflows
        let checked = usize::try_from(n_stack).ok().and_then(|n| {
            base.shape()
                .iter()
                .try_fold(n, |acc, &d| acc.checked_mul(d))
                .and_then(|len| len.checked_mul(std::mem::size_of::<T>()))
                .filter(|&bytes| bytes <= isize::MAX as usize)
                .map(|_| n)
        });
        let n_stack = match checked {
            Some(n) => n,
            None => {
                return Err(WrapError::InvalidConfiguration(format!(
                    "n_stack = {} is too large for frames of shape {:?}",
                    n_stack,
                    base.shape()
                ))
                .into())
            }
        };
        let mut shape = Vec::with_capacity(base.shape().len() + 1);
        shape.push(n_stack);
        shape.extend_from_slice(base.shape());
        let observation_space = BoxSpace::new(base.low(), base.high(), shape);
        let history = FrameHistory::new(n_stack, base.shape());
        debug!(
            "FrameStack: n_stack = {}, observation shape = {:?}",
            n_stack,
            observation_space.shape()
        );

        Ok(Self {
            env,
            history,
            observation_space,
        })
    }

    /// The number of stacked frames.
    pub fn n_stack(&self) -> usize {
        self.observation_space.shape()[0]
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

    fn stacked_obs(&self) -> Result<ArrayObs<T>> {
        Ok(ArrayObs(self.history.stacked()?))
    }
}

impl<E, T> Env for FrameStack<E, T>
where
    E: Env<Obs = ArrayObs<T>, ObsSpace = BoxSpace<T>>,
    T: Element,
{
    type Config = FrameStackConfig<E::Config>;
    type Obs = ArrayObs<T>;
    type Act = E::Act;
    type Info = E::Info;
    type ObsSpace = BoxSpace<T>;
    type ActSpace = E::ActSpace;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let env = E::build(&config.env_config, seed)?;
        Self::new(env, config.n_stack)
    }

    /// Resets the inner environment and fills every slot with its initial observation.
    fn reset(&mut self) -> Result<Self::Obs> {
        trace!("FrameStack::reset()");
        let obs = self.env.reset()?;
        self.history.fill(&obs.0)?;
        self.stacked_obs()
    }

    fn step(&mut self, act: &Self::Act) -> Result<(Step<Self>, Record)> {
        trace!("FrameStack::step()");
        let (step, record) = self.env.step(act)?;
        self.history.push(&step.obs.0)?;
        let step = Step::new(
            self.stacked_obs()?,
            step.reward,
            step.is_terminated,
            step.is_truncated,
            step.info,
        );
        Ok((step, record))
    }

    fn observation_space(&self) -> &Self::ObsSpace {
        &self.observation_space
    }

    fn action_space(&self) -> &Self::ActSpace {
        self.env.action_space()
    }

    fn close(&mut self) -> Result<()> {
        self.env.close()
    }
}
