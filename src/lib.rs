//! # Leaderboard Engine
//!
//! Pagination and statistics aggregation core for game leaderboards.
//!
//! Two independent, stateless components, composed by the presentation
//! layer: a multi-resolution page window for navigating very large listings,
//! and an aggregation engine that merges sparse per-player counters, ranks
//! them for charting, and resolves per-category best records. Persistence
//! and rendering live outside this crate; everything here is a pure
//! computation over already-materialized inputs.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (stat records, chart entries, players)
//! - **paginate**: Page window computation and paginator helpers
//! - **aggregate**: Counter merging, chart ranking, best-record resolution
//! - **report**: Request-scoped channel dashboards
//! - **config**: Chart category configuration

pub mod aggregate;
pub mod config;
pub mod models;
pub mod paginate;
pub mod report;

pub use models::*;
