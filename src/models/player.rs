//! Materialized player rows.

use serde::{Deserialize, Serialize};

use super::{StatRecord, TimedRecord};

/// One player's statistics as loaded by the storage layer for a channel
/// dashboard.
///
/// This is a snapshot, not a live entity: it is built from persisted counter
/// fields before aggregation starts and discarded with the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Display name.
    pub name: String,

    /// Experience points. Can go negative.
    pub experience: i64,

    /// Lifetime ducks killed.
    pub ducks_killed: u64,

    /// Sparse shot counters.
    #[serde(default)]
    pub shooting_stats: StatRecord,

    /// Best time per duck type, in seconds.
    #[serde(default)]
    pub best_times: TimedRecord,
}

impl PlayerSnapshot {
    pub fn new(name: impl Into<String>, experience: i64, ducks_killed: u64) -> Self {
        Self {
            name: name.into(),
            experience,
            ducks_killed,
            shooting_stats: StatRecord::new(),
            best_times: TimedRecord::new(),
        }
    }
}
