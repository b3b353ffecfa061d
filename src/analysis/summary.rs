//! Per-run accounting of processed, filtered and accepted entities.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Why an entity was left out of an output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterReason {
    LowSeasonVolume,
    LowRecentVolume,
    TooFewGames,
    BelowMateriality,
    BelowDifferenceThreshold,
    NoChange,
    NoOpponent,
    MissingDefenseAverage,
    MissingLeagueAverage,
    MissingPlayerAverage,
    MatchupMismatch,
    UnsupportedPosition,
}

impl FilterReason {
    pub fn description(&self) -> &'static str {
        match self {
            FilterReason::LowSeasonVolume => "season average below floor",
            FilterReason::LowRecentVolume => "recent average below floor",
            FilterReason::TooFewGames => "too few games played",
            FilterReason::BelowMateriality => "percent change below materiality floor",
            FilterReason::BelowDifferenceThreshold => "yardage difference below threshold",
            FilterReason::NoChange => "no change",
            FilterReason::NoOpponent => "no scheduled opponent",
            FilterReason::MissingDefenseAverage => "no opponent defense average",
            FilterReason::MissingLeagueAverage => "no league average",
            FilterReason::MissingPlayerAverage => "no player average",
            FilterReason::MatchupMismatch => "matchup does not support trend",
            FilterReason::UnsupportedPosition => "position not tracked",
        }
    }
}

impl fmt::Display for FilterReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Counts reported at the end of every generator run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub label: String,
    pub processed: usize,
    pub accepted: usize,
    pub malformed: usize,
    pub filtered: BTreeMap<FilterReason, usize>,
}

impl RunSummary {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn record_accepted(&mut self) {
        self.processed += 1;
        self.accepted += 1;
    }

    pub fn record_accepted_count(&mut self, count: usize) {
        self.processed += count;
        self.accepted += count;
    }

    pub fn record_filtered(&mut self, reason: FilterReason) {
        self.processed += 1;
        *self.filtered.entry(reason).or_insert(0) += 1;
    }

    pub fn record_malformed(&mut self, count: usize) {
        self.malformed += count;
    }

    pub fn filtered_total(&self) -> usize {
        self.filtered.values().sum()
    }

    pub fn filtered_by(&self, reason: FilterReason) -> usize {
        self.filtered.get(&reason).copied().unwrap_or(0)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} summary", self.label)?;
        writeln!(f, "  processed: {}", self.processed)?;
        writeln!(f, "  accepted:  {}", self.accepted)?;
        writeln!(f, "  filtered:  {}", self.filtered_total())?;
        for (reason, count) in &self.filtered {
            writeln!(f, "    {:<40} {}", reason.description(), count)?;
        }
        write!(f, "  malformed rows skipped: {}", self.malformed)
    }
}
