//! Per-entity statistic records.
//!
//! Records are sparse: a key an entity never incremented is simply absent and
//! reads as zero. They are materialized by the storage layer and consumed by
//! the aggregation engine for the duration of one request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A sparse set of named counters for one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatRecord(HashMap<String, u64>);

impl StatRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a counter. Absent keys read as zero.
    pub fn get(&self, key: &str) -> u64 {
        self.0.get(key).copied().unwrap_or(0)
    }

    /// Set a counter, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: u64) {
        self.0.insert(key.into(), value);
    }

    /// Add every counter from `other` into this record.
    ///
    /// Keys present only in `other` are introduced; keys present in both are
    /// summed.
    pub fn merge(&mut self, other: &StatRecord) {
        for (key, value) in &other.0 {
            *self.0.entry(key.clone()).or_insert(0) += value;
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl From<HashMap<String, u64>> for StatRecord {
    fn from(counters: HashMap<String, u64>) -> Self {
        Self(counters)
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for StatRecord {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Per-category elapsed times for one entity. Lower is better.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimedRecord(HashMap<String, f64>);

impl TimedRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a category's time, if one was ever recorded.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.0.get(category).copied()
    }

    /// Record a time for a category, replacing any previous value.
    pub fn set(&mut self, category: impl Into<String>, value: f64) {
        self.0.insert(category.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(category, time)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl From<HashMap<String, f64>> for TimedRecord {
    fn from(times: HashMap<String, f64>) -> Self {
        Self(times)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for TimedRecord {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
