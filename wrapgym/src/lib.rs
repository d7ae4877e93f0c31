//! Composable wrappers for step-based environments.
//!
//! wrapgym consists of the following crates:
//!
//! * [wrapgym-core](wrapgym_core) provides the environment interface, spaces,
//!   records and the wrappers, including
//!   [`FrameStack`](wrapgym_core::wrapper::FrameStack) and
//!   [`TransformEnv`](wrapgym_core::wrapper::TransformEnv).
//! * [wrapgym-toy-env](wrapgym_toy_env) has a toy environment emitting
//!   grayscale pixel frames.
//! * wrapgym is just a collection of examples.
//!
//! Examples can be run with, e.g.,
//!
//! ```bash
//! cargo run --example frame_stack -- --n-stack 4
//! ```
pub use wrapgym_core;
pub use wrapgym_toy_env;
