//! NFL Insights Library
//!
//! Batch pipeline that turns per-game NFL player statistics, team schedules
//! and defensive averages into derived insight tables.
//!
//! ## Features
//!
//! - **Hot/Cold Players**: recent form against season average, best-moving yardage stat
//! - **Players to Watch**: position-primary trends gated by next week's matchup
//! - **Projections**: per-stat projections blended with the opponent's defense
//! - **Weekly Leaders**: top performers per position for a week
//! - **Matchup Rankings**: defenses ranked by yards allowed above league average
//! - **Database Storage**: SQLite source and result tables
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nfl_insights::{commands::{common::CommandContext, hot_cold::handle_hot_cold}, Week};
//! use std::path::Path;
//!
//! # fn example() -> nfl_insights::Result<()> {
//! let mut ctx = CommandContext::new(Path::new("insights.db"), None)?;
//! let summary = handle_hot_cold(&mut ctx, Week::new(6), false)?;
//! println!("{} players flagged", summary.accepted);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the database path to avoid passing it in every command:
//! ```bash
//! export NFL_INSIGHTS_DB=/path/to/insights.db
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Position, PrimaryStat, StatCategory, Week};
pub use config::InsightsConfig;
pub use error::{InsightsError, Result};

pub const DB_PATH_ENV_VAR: &str = "NFL_INSIGHTS_DB";
