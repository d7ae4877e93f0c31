//! Wrappers of environments.
//!
//! A wrapper holds an inner environment and implements [`Env`](crate::Env)
//! itself, modifying one aspect of the interaction and delegating the rest.
//! Wrappers compose by nesting:
//!
//! ```rust
//! use wrapgym_core::{
//!     dummy::{CounterEnv, CounterEnvConfig},
//!     wrapper::{
//!         ClipReward, ClipRewardConfig, FrameStack, RawAct, RawObs, RewardFilter, TransformEnv,
//!     },
//!     Env,
//! };
//! # fn main() -> anyhow::Result<()> {
//! let env = CounterEnv::build(&CounterEnvConfig::default(), 0)?;
//! let env = TransformEnv::new(
//!     env,
//!     RawObs,
//!     ClipReward::build(&ClipRewardConfig::default())?,
//!     RawAct,
//! );
//! let mut env = FrameStack::new(env, 4)?;
//! assert_eq!(env.observation_space().shape()[0], 4);
//! # let _ = env.reset()?;
//! # Ok(())
//! # }
//! ```
mod filter;
mod frame_stack;
mod transform;
pub use filter::{
    ActFilter, ClipReward, ClipRewardConfig, ObsFilter, RawAct, RawFilterConfig, RawObs,
    RawReward, RemapAct, RemapActConfig, RewardFilter, ScaleObs, ScaleObsConfig,
};
pub use frame_stack::{FrameStack, FrameStackConfig};
pub use transform::{TransformEnv, TransformEnvConfig};
