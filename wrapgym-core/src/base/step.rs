//! Environment step.
use super::Env;
use crate::record::Record;

/// Additional information to `Obs` and `Act`.
pub trait Info {}

impl Info for () {}

impl Info for Record {}

/// The result of an environment step: observation, reward, termination flags
/// and information.
///
/// The termination of an episode is reported with two separate flags:
/// `is_terminated` for reaching a terminal state of the MDP and `is_truncated`
/// for an episode cut from outside, e.g., by a time limit.
pub struct Step<E: Env> {
    /// Observation.
    pub obs: E::Obs,

    /// Reward.
    pub reward: f32,

    /// Flag denoting if episode is terminated.
    pub is_terminated: bool,

    /// Flag denoting if episode is truncated.
    pub is_truncated: bool,

    /// Information defined by user.
    pub info: E::Info,

    /// Initial observation of the next episode.
    ///
    /// Only [`Env::step_with_reset`] sets this value, when the episode ended.
    pub init_obs: Option<E::Obs>,
}

impl<E: Env> Step<E> {
    /// Constructs a [`Step`] object.
    pub fn new(
        obs: E::Obs,
        reward: f32,
        is_terminated: bool,
        is_truncated: bool,
        info: E::Info,
    ) -> Self {
        Step {
            obs,
            reward,
            is_terminated,
            is_truncated,
            info,
            init_obs: None,
        }
    }

    #[inline]
    /// Terminated or truncated.
    pub fn is_done(&self) -> bool {
        self.is_terminated || self.is_truncated
    }
}
