//! Base implementation of records.
use crate::error::RecordError;
use chrono::prelude::{DateTime, Local};
use std::collections::HashMap;

/// Represents possible types of values that can be stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single floating-point value.
    Scalar(f32),

    /// A timestamp with local timezone.
    DateTime(DateTime<Local>),
}

/// A container for storing key-value pairs of various data types.
///
/// Records are used as the per-step information mapping of environments and
/// for values logged by wrappers and filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        let mut map = HashMap::new();
        map.insert(name.into(), RecordValue::Scalar(value));
        Self(map)
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Gets a reference to the value associated with the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Merges two records, consuming both.
    ///
    /// Values of `record` overwrite values of `self` with the same key.
    pub fn merge(self, record: Record) -> Self {
        Record(self.0.into_iter().chain(record.0).collect())
    }

    /// Gets a scalar value from the record.
    pub fn get_scalar(&self, k: &str) -> Result<f32, RecordError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(RecordError::RecordValueTypeError("Scalar".to_string())),
            None => Err(RecordError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a timestamp from the record.
    pub fn get_datetime(&self, k: &str) -> Result<DateTime<Local>, RecordError> {
        match self.0.get(k) {
            Some(RecordValue::DateTime(v)) => Ok(*v),
            Some(_) => Err(RecordError::RecordValueTypeError("DateTime".to_string())),
            None => Err(RecordError::RecordKeyError(k.to_string())),
        }
    }

    /// Checks if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of values in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
