//! Chart projections.
//!
//! These are derived, read-only values built once per request and handed to
//! the rendering layer.

use serde::{Deserialize, Serialize};

/// One bar of a ranked chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub label: String,
    pub value: u64,
}

impl ChartEntry {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One configured chart category: the counter key it reads and the label it
/// displays under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartCategory {
    pub key: String,
    pub label: String,
}

impl ChartCategory {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Record holder for one category: the minimal value seen and the entity
/// that set it.
///
/// `owner` is whatever reference the caller passed in, typically a player
/// name or id. Display rounding is left to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestRecord<O> {
    pub value: f64,
    pub owner: O,
}
