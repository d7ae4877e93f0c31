#![warn(missing_docs)]
//! Environment interface and composable wrappers.
//!
//! The central abstraction is [`Env`], a step-based simulation with an observation
//! space, an action space and a five-field [`Step`] result. Wrappers implement
//! [`Env`] themselves and hold an inner environment, so they can be chained in
//! any order:
//!
//! * [`FrameStack`](wrapper::FrameStack) keeps the last `k` observations and
//!   returns them stacked along a new leading axis.
//! * [`TransformEnv`](wrapper::TransformEnv) applies an observation filter, a
//!   reward filter and an action filter around the inner environment.
//!
//! ```rust
//! use wrapgym_core::{
//!     dummy::{CounterEnv, CounterEnvConfig},
//!     wrapper::FrameStack,
//!     Env,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let env = CounterEnv::build(&CounterEnvConfig::default().obs_dim(4), 0)?;
//! let mut env = FrameStack::new(env, 3)?;
//! let obs = env.reset()?;
//! assert_eq!(obs.0.shape(), &[3, 4]);
//! # Ok(())
//! # }
//! ```
pub mod dummy;
pub mod error;
pub mod record;
pub mod rollout;
pub mod wrapper;

mod base;
pub use base::{
    Act, ArrayObs, BoxSpace, Discrete, DiscreteAct, Element, Env, Info, Obs, Policy,
    RandomPolicy, Space, Step,
};
