//! Player performance classification.
//!
//! Two selection policies feed two different tables and are kept separate:
//!
//! - **Best change** (hot/cold): the primary stat is whichever yardage
//!   category moved the most in percentage terms.
//! - **Position primary** (players to watch): the primary stat is fixed by
//!   position and judged on absolute yardage difference.

use super::delta::{category_change, StatChange};
use super::player::{PlayerKey, StatAverages};
use super::summary::FilterReason;
use crate::cli::types::PrimaryStat;
use crate::config::{HotColdThresholds, WatchThresholds};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    Hot,
    Cold,
    Overperforming,
    Underperforming,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Hot => "hot",
            Trend::Cold => "cold",
            Trend::Overperforming => "Overperforming",
            Trend::Underperforming => "Underperforming",
        }
    }

    /// Whether the player is producing above their season average.
    pub fn is_positive(&self) -> bool {
        matches!(self, Trend::Hot | Trend::Overperforming)
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A player judged notable by a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub player: PlayerKey,
    pub primary: PrimaryStat,
    pub recent_average: f64,
    pub season_average: f64,
    pub percent_change: f64,
    pub trend: Trend,
}

impl ClassificationResult {
    fn new(player: &PlayerKey, primary: PrimaryStat, change: StatChange, trend: Trend) -> Self {
        Self {
            player: player.clone(),
            primary,
            recent_average: change.recent,
            season_average: change.season,
            percent_change: change.percent_change,
            trend,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Notable(ClassificationResult),
    Filtered(FilterReason),
}

impl Verdict {
    pub fn notable(self) -> Option<ClassificationResult> {
        match self {
            Verdict::Notable(result) => Some(result),
            Verdict::Filtered(_) => None,
        }
    }
}

/// Selection policy with its threshold table.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationPolicy {
    BestChange(HotColdThresholds),
    PositionPrimary(WatchThresholds),
}

impl ClassificationPolicy {
    pub fn classify(
        &self,
        player: &PlayerKey,
        recent: &StatAverages,
        season: &StatAverages,
        games_played: u32,
    ) -> Verdict {
        match self {
            ClassificationPolicy::BestChange(t) => {
                classify_best_change(t, player, recent, season, games_played)
            }
            ClassificationPolicy::PositionPrimary(t) => {
                classify_position_primary(t, player, recent, season, games_played)
            }
        }
    }
}

/// Pick the yardage stat with the largest absolute percent change.
///
/// Ties keep the earlier stat in passing, rushing, receiving order.
pub fn select_best_change(
    recent: &StatAverages,
    season: &StatAverages,
) -> (PrimaryStat, StatChange) {
    let mut best = (
        PrimaryStat::Passing,
        category_change(recent, season, PrimaryStat::Passing.category()),
    );
    for stat in PrimaryStat::ALL.into_iter().skip(1) {
        let change = category_change(recent, season, stat.category());
        if change.percent_change.abs() > best.1.percent_change.abs() {
            best = (stat, change);
        }
    }
    best
}

/// Hot/cold classification.
pub fn classify_best_change(
    thresholds: &HotColdThresholds,
    player: &PlayerKey,
    recent: &StatAverages,
    season: &StatAverages,
    games_played: u32,
) -> Verdict {
    let (primary, change) = select_best_change(recent, season);

    if change.season <= thresholds.min_season_average.get(primary) {
        return Verdict::Filtered(FilterReason::LowSeasonVolume);
    }
    if change.recent <= thresholds.min_recent_average.get(primary) {
        return Verdict::Filtered(FilterReason::LowRecentVolume);
    }
    if games_played <= thresholds.min_games_played {
        return Verdict::Filtered(FilterReason::TooFewGames);
    }
    if change.percent_change.abs() < thresholds.min_percent_change {
        return Verdict::Filtered(FilterReason::BelowMateriality);
    }

    let trend = if change.percent_change > 0.0 {
        Trend::Hot
    } else if change.percent_change < 0.0 {
        Trend::Cold
    } else {
        return Verdict::Filtered(FilterReason::NoChange);
    };

    tracing::debug!(
        player = %player,
        stat = %primary,
        change = change.percent_change,
        trend = %trend,
        "hot/cold candidate accepted"
    );
    Verdict::Notable(ClassificationResult::new(player, primary, change, trend))
}

/// Players-to-watch classification, before the matchup gate.
pub fn classify_position_primary(
    thresholds: &WatchThresholds,
    player: &PlayerKey,
    recent: &StatAverages,
    season: &StatAverages,
    games_played: u32,
) -> Verdict {
    let primary = player.position.primary_stat();
    let change = category_change(recent, season, primary.category());

    if change.delta.abs() <= thresholds.min_difference.get(primary) {
        return Verdict::Filtered(FilterReason::BelowDifferenceThreshold);
    }
    if change.season < thresholds.min_season_average {
        return Verdict::Filtered(FilterReason::LowSeasonVolume);
    }
    if change.recent <= thresholds.min_recent_average {
        return Verdict::Filtered(FilterReason::LowRecentVolume);
    }
    if games_played < thresholds.min_games_played {
        return Verdict::Filtered(FilterReason::TooFewGames);
    }

    let trend = if change.recent > change.season {
        Trend::Overperforming
    } else if change.recent < change.season {
        Trend::Underperforming
    } else {
        return Verdict::Filtered(FilterReason::NoChange);
    };

    Verdict::Notable(ClassificationResult::new(player, primary, change, trend))
}
