//! Command implementations for the nfl-insights CLI
//!
//! Each generator is split into a pure `generate_*` function over a
//! [`StatSource`](crate::storage::StatSource) and a `handle_*` function that
//! takes the run lock, writes through the [`ResultSink`](crate::storage::ResultSink)
//! and prints the result.

pub mod common;
pub mod hot_cold;
pub mod import;
pub mod matchup_rankings;
pub mod players_to_watch;
pub mod projections;
pub mod run_all;
pub mod weekly_leaders;


use std::path::PathBuf;

use crate::{storage::InsightsDatabase, Result, DB_PATH_ENV_VAR};

/// Resolve the database path from option, environment variable or the
/// default cache location.
pub fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    match db.or_else(|| {
        std::env::var(DB_PATH_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    }) {
        Some(path) => Ok(path),
        None => InsightsDatabase::default_path(),
    }
}
