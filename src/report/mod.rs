//! Channel dashboard computation.
//!
//! Composes the aggregation engine into the full set of charts a channel
//! page renders: per-player rankings, the merged shot breakdown and the
//! best-time records.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::aggregate::{best_records, chart_series, merge_all};
use crate::models::{BestRecord, ChartCategory, ChartEntry, PlayerSnapshot};

/// Only the leading players make it into the per-player charts.
const CHART_PLAYER_LIMIT: usize = 100;

/// Players at or below this experience are hidden from the per-player charts.
const CHART_EXPERIENCE_FLOOR: i64 = 1;

/// Aggregated dashboard for one channel's players.
///
/// Built once per request from materialized [`PlayerSnapshot`] rows and
/// handed to the rendering layer; nothing here outlives the request.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelReport {
    /// When this report was computed.
    pub computed_at: DateTime<Utc>,

    /// Players considered, before any chart filtering.
    pub player_count: u32,

    /// Leading players by experience, in the caller's ranking order.
    pub experience_chart: Vec<ChartEntry>,

    /// The same leading slice re-ranked by ducks killed.
    pub ducks_chart: Vec<ChartEntry>,

    /// Channel-wide shot breakdown over the configured categories.
    pub shots_chart: Vec<ChartEntry>,

    /// Best time per duck type, keyed by category, owned by a player name.
    pub best_times: HashMap<String, BestRecord<String>>,
}

impl ChannelReport {
    /// Compute the dashboard for `players`, which the caller supplies already
    /// ranked by experience descending (its listing order).
    pub fn compute(players: &[PlayerSnapshot], categories: &[ChartCategory]) -> Self {
        let top = &players[..players.len().min(CHART_PLAYER_LIMIT)];

        let experience_chart = top
            .iter()
            .filter(|p| p.experience > CHART_EXPERIENCE_FLOOR)
            .map(|p| ChartEntry::new(p.name.clone(), p.experience as u64))
            .collect();

        let mut by_ducks: Vec<&PlayerSnapshot> = top.iter().collect();
        by_ducks.sort_by(|a, b| b.ducks_killed.cmp(&a.ducks_killed));
        let ducks_chart = by_ducks
            .into_iter()
            .filter(|p| p.experience > CHART_EXPERIENCE_FLOOR)
            .map(|p| ChartEntry::new(p.name.clone(), p.ducks_killed))
            .collect();

        let totals = merge_all(players.iter().map(|p| &p.shooting_stats));
        let shots_chart = chart_series(&totals, categories);

        let best_times = best_records(players.iter().map(|p| (p.name.clone(), p.best_times.clone())));

        debug!(
            players = players.len(),
            categories = categories.len(),
            records = best_times.len(),
            "computed channel report"
        );

        Self {
            computed_at: Utc::now(),
            player_count: players.len() as u32,
            experience_chart,
            ducks_chart,
            shots_chart,
            best_times,
        }
    }
}
