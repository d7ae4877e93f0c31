//! Core functionalities.
mod env;
mod policy;
mod space;
mod step;
pub use env::Env;
pub use policy::{Policy, RandomPolicy};
pub use space::{ArrayObs, BoxSpace, Discrete, DiscreteAct, Element, Space};
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
pub trait Obs: Clone + Debug {}

/// An action of an environment.
pub trait Act: Clone + Debug {}
