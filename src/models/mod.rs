//! Core data models for the leaderboard engine.

mod chart;
mod player;
mod record;

pub use chart::*;
pub use player::*;
pub use record::*;
