//! Policy.
use super::{Env, Space};

/// A policy on an environment.
///
/// Policy is a mapping from an observation to an action.
/// The mapping can be either of deterministic or stochastic.
pub trait Policy<E: Env> {
    /// Sample an action given an observation.
    fn sample(&mut self, obs: &E::Obs) -> E::Act;
}

/// A policy taking actions uniformly at random from the action space.
pub struct RandomPolicy<E: Env> {
    space: E::ActSpace,
    rng: fastrand::Rng,
}

impl<E: Env> RandomPolicy<E> {
    /// Constructs a random policy over the action space of `env`.
    pub fn new(env: &E, seed: u64) -> Self {
        Self {
            space: env.action_space().clone(),
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl<E: Env> Policy<E> for RandomPolicy<E> {
    fn sample(&mut self, _obs: &E::Obs) -> E::Act {
        self.space.sample(&mut self.rng)
    }
}
