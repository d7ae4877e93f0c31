//! Observation and action spaces.
use super::{Act, Obs};
use ndarray::{ArrayD, IxDyn};
use num_traits::{AsPrimitive, Zero};
use std::fmt::Debug;

/// A set of values an environment accepts or emits.
pub trait Space: Clone + Debug {
    /// The type of the elements of the space.
    type Item: Clone + Debug;

    /// Samples an element uniformly.
    fn sample(&self, rng: &mut fastrand::Rng) -> Self::Item;

    /// Returns `true` if `item` belongs to the space.
    fn contains(&self, item: &Self::Item) -> bool;
}

/// Numeric element type of array observations.
pub trait Element: Copy + Debug + PartialOrd + Zero + AsPrimitive<f64> + 'static {
    /// Converts from `f64` with `as` semantics.
    fn from_f64(v: f64) -> Self;
}

impl<T> Element for T
where
    T: Copy + Debug + PartialOrd + Zero + AsPrimitive<f64> + 'static,
    f64: AsPrimitive<T>,
{
    fn from_f64(v: f64) -> Self {
        v.as_()
    }
}

/// An observation represented as a dynamic-dimensional array.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayObs<T>(pub ArrayD<T>);

impl<T: Clone + Debug> Obs for ArrayObs<T> {}

impl<T> From<ArrayD<T>> for ArrayObs<T> {
    fn from(array: ArrayD<T>) -> Self {
        Self(array)
    }
}

/// A box in `R^n` with a common lower and upper bound for every element.
///
/// The element type `T` is the data type of observations in the space.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSpace<T> {
    low: T,
    high: T,
    shape: Vec<usize>,
}

impl<T: Element> BoxSpace<T> {
    /// Constructs a box space.
    pub fn new(low: T, high: T, shape: impl Into<Vec<usize>>) -> Self {
        Self {
            low,
            high,
            shape: shape.into(),
        }
    }

    /// Lower bound of elements.
    pub fn low(&self) -> T {
        self.low
    }

    /// Upper bound of elements.
    pub fn high(&self) -> T {
        self.high
    }

    /// Shape of observations.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Name of the element type.
    pub fn dtype(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl<T: Element> Space for BoxSpace<T> {
    type Item = ArrayObs<T>;

    fn sample(&self, rng: &mut fastrand::Rng) -> ArrayObs<T> {
        let low: f64 = self.low.as_();
        let high: f64 = self.high.as_();
        let array = ArrayD::from_shape_fn(IxDyn(&self.shape), |_| {
            T::from_f64(low + (high - low) * rng.f64())
        });
        ArrayObs(array)
    }

    fn contains(&self, item: &ArrayObs<T>) -> bool {
        item.0.shape() == self.shape.as_slice()
            && item.0.iter().all(|v| *v >= self.low && *v <= self.high)
    }
}

/// A discrete action, an index in `[0, n)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscreteAct(pub i64);

impl Act for DiscreteAct {}

impl From<i64> for DiscreteAct {
    fn from(act: i64) -> Self {
        Self(act)
    }
}

/// A space of `n` discrete actions `{0, 1, ..., n - 1}`.
///
/// `n` is expected to be positive; sampling from an empty space panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Discrete {
    n: i64,
}

impl Discrete {
    /// Constructs a discrete space of `n` actions.
    pub fn new(n: i64) -> Self {
        Self { n }
    }

    /// The number of actions.
    pub fn n(&self) -> i64 {
        self.n
    }
}

impl Space for Discrete {
    type Item = DiscreteAct;

    fn sample(&self, rng: &mut fastrand::Rng) -> DiscreteAct {
        DiscreteAct(rng.i64(0..self.n))
    }

    fn contains(&self, item: &DiscreteAct) -> bool {
        0 <= item.0 && item.0 < self.n
    }
}
