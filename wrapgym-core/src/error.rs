//! Errors in the library.
use thiserror::Error;

/// Errors raised when accessing a [`Record`](crate::record::Record).
#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),
}

/// Errors raised by wrappers and filters.
///
/// Errors of an inner environment are never converted into this type; they reach
/// the caller as they were raised.
#[derive(Error, Debug, PartialEq)]
pub enum WrapError {
    /// A wrapper or filter was given a configuration it cannot work with.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The inner environment emitted an observation that does not match its
    /// declared observation space.
    #[error("Observation shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Shape declared by the observation space.
        expected: Vec<usize>,

        /// Shape of the observation actually received.
        actual: Vec<usize>,
    },
}
