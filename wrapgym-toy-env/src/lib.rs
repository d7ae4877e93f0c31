//! A toy pixel environment for [`wrapgym-core`](wrapgym_core).
//!
//! [`PixelEnv`] emits grayscale `u8` frames like an emulated video game,
//! without any emulator behind it. It is useful to try wrappers such as
//! [`FrameStack`](wrapgym_core::wrapper::FrameStack) on image observations.
//!
//! ```
//! use wrapgym_core::{wrapper::FrameStack, DiscreteAct, Env as _};
//! use wrapgym_toy_env::{PixelEnv, PixelEnvConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = PixelEnvConfig::default().height(16).width(12);
//! let mut env = FrameStack::new(PixelEnv::build(&config, 42)?, 4)?;
//! let obs = env.reset()?;
//! assert_eq!(obs.0.shape(), &[4, 16, 12]);
//!
//! let (step, _) = env.step(&DiscreteAct(2))?;
//! assert_eq!(step.obs.0.shape(), &[4, 16, 12]);
//! # Ok(())
//! # }
//! ```
mod env;
pub use env::{PixelEnv, PixelEnvConfig, PixelEnvError};
