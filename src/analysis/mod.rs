//! Pure computation over in-memory stat rows.
//!
//! Nothing here performs I/O:
//! - `player`: identities, game rows and averages
//! - `aggregate`: recent and season windows
//! - `delta`: recent-versus-season change
//! - `classify`: hot/cold and players-to-watch policies
//! - `reference`: schedule and defensive baselines
//! - `matchup`: opponent matchup tiers
//! - `projection`: opponent-adjusted projections
//! - `leaders`: weekly leaders and defensive rankings
//! - `summary`: per-run accounting

pub mod aggregate;
pub mod classify;
pub mod delta;
pub mod leaders;
pub mod matchup;
pub mod player;
pub mod projection;
pub mod reference;
pub mod summary;

pub use aggregate::{average_games, build_windows, PlayerWindow};
pub use classify::{ClassificationPolicy, ClassificationResult, Trend, Verdict};
pub use leaders::{MatchupRanking, WeeklyLeader};
pub use matchup::{MatchupAssessment, MatchupTier, WatchedPlayer};
pub use player::{normalize_name, PlayerGameStat, PlayerKey, StatAverages};
pub use projection::Projection;
pub use reference::{DefenseAverages, LeagueAverages, ReferenceData, Schedule};
pub use summary::{FilterReason, RunSummary};
