//! Environment.
use super::{Act, Info, Obs, Space, Step};
use crate::record::Record;
use anyhow::Result;

/// Represents an environment, typically an MDP.
///
/// Wrappers implement this trait too, so that a wrapped environment can be used
/// wherever the inner one could.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// Space of observations.
    type ObsSpace: Space<Item = Self::Obs>;

    /// Space of actions.
    type ActSpace: Space<Item = Self::Act>;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Resets the environment and returns the initial observation of a new episode.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Performes an environment step.
    ///
    /// The returned [`Record`] carries auxiliary values for logging; it is not
    /// part of the transition.
    fn step(&mut self, act: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized;

    /// Performes an environment step and resets the environment if the episode ends.
    ///
    /// On episode end, the initial observation of the next episode is stored in
    /// [`Step::init_obs`].
    fn step_with_reset(&mut self, act: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        let (mut step, record) = self.step(act)?;
        if step.is_done() {
            step.init_obs = Some(self.reset()?);
        }
        Ok((step, record))
    }

    /// Space of observations.
    fn observation_space(&self) -> &Self::ObsSpace;

    /// Space of actions.
    fn action_space(&self) -> &Self::ActSpace;

    /// Releases resources held by the environment.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
