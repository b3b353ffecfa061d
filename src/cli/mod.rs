//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::Week;

use crate::commands::run_all::Phase;

/// Arguments shared by the generator subcommands.
#[derive(Debug, Args)]
pub struct WeekArgs {
    /// Current week (1-18). Recent form is measured through this week.
    #[clap(long, short)]
    pub week: Week,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load a JSON snapshot of game stats, schedule and defensive averages.
    Import {
        /// Snapshot file with `games`, `schedule`, `defense` and `league` arrays.
        file: PathBuf,
    },

    /// Classify players as hot or cold from recent versus season form.
    HotCold {
        #[clap(flatten)]
        args: WeekArgs,
    },

    /// Players trending up or down whose next matchup supports the trend.
    PlayersToWatch {
        #[clap(flatten)]
        args: WeekArgs,
    },

    /// Opponent-adjusted stat projections for next week.
    Projections {
        #[clap(flatten)]
        args: WeekArgs,
    },

    /// Top players per position for a week.
    WeeklyLeaders {
        #[clap(flatten)]
        args: WeekArgs,

        /// Players per position (defaults to the configured value, 5).
        #[clap(long, short)]
        limit: Option<usize>,
    },

    /// Rank defenses by yards allowed above the league average.
    MatchupRankings {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Run every generator in order: classification, projections, leaders.
    RunAll {
        /// Current week (1-18).
        #[clap(long, short)]
        week: Week,

        /// Run a single phase: classification | projections | leaders
        #[clap(long)]
        phase: Option<Phase>,

        /// Skip the optional leaders phase.
        #[clap(long)]
        skip_optional: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "nfl-insights",
    version,
    about = "NFL player performance classification and matchup scoring"
)]
pub struct Cli {
    /// Database path (or set `NFL_INSIGHTS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Threshold configuration file (TOML).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log per-player decisions.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
