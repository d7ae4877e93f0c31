//! Records of auxiliary values emitted along with environment steps.
//!
//! A [`Record`] is a map from string keys to [`RecordValue`]s. Environments and
//! filters return one with every step; wrappers merge the records of the layers
//! they hold. A [`Recorder`] is the destination of records written in rollouts.
//!
//! ```rust
//! use wrapgym_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("reward", RecordValue::Scalar(-1.0));
//! record.insert("time", RecordValue::DateTime(chrono::Local::now()));
//!
//! assert_eq!(record.get_scalar("reward").unwrap(), -1.0);
//! assert!(record.get_datetime("time").is_ok());
//! ```
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
