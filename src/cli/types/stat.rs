//! Stat category types shared by the data model and the output tables.

use crate::error::InsightsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One column of a per-game box score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatCategory {
    PassingAttempts,
    Completions,
    PassingYards,
    PassingTds,
    Interceptions,
    RushingAttempts,
    RushingYards,
    RushingTds,
    Receptions,
    ReceivingYards,
    ReceivingTds,
}

impl StatCategory {
    pub const ALL: [StatCategory; 11] = [
        StatCategory::PassingAttempts,
        StatCategory::Completions,
        StatCategory::PassingYards,
        StatCategory::PassingTds,
        StatCategory::Interceptions,
        StatCategory::RushingAttempts,
        StatCategory::RushingYards,
        StatCategory::RushingTds,
        StatCategory::Receptions,
        StatCategory::ReceivingYards,
        StatCategory::ReceivingTds,
    ];

    /// Categories produced by throwing the ball.
    pub fn is_passing(&self) -> bool {
        matches!(
            self,
            StatCategory::PassingAttempts
                | StatCategory::Completions
                | StatCategory::PassingYards
                | StatCategory::PassingTds
                | StatCategory::Interceptions
        )
    }

    /// Yardage totals, the only categories that can go negative.
    pub fn is_yardage(&self) -> bool {
        matches!(
            self,
            StatCategory::PassingYards | StatCategory::RushingYards | StatCategory::ReceivingYards
        )
    }

    /// Snake-case key used for database columns and the `stat_key` output field.
    pub fn key(&self) -> &'static str {
        match self {
            StatCategory::PassingAttempts => "passing_attempts",
            StatCategory::Completions => "completions",
            StatCategory::PassingYards => "passing_yards",
            StatCategory::PassingTds => "passing_tds",
            StatCategory::Interceptions => "interceptions",
            StatCategory::RushingAttempts => "rushing_attempts",
            StatCategory::RushingYards => "rushing_yards",
            StatCategory::RushingTds => "rushing_tds",
            StatCategory::Receptions => "receptions",
            StatCategory::ReceivingYards => "receiving_yards",
            StatCategory::ReceivingTds => "receiving_tds",
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StatCategory {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        StatCategory::ALL
            .iter()
            .copied()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| InsightsError::InvalidStat {
                stat: s.to_string(),
            })
    }
}

/// The yardage categories a player's role is judged by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryStat {
    Passing,
    Rushing,
    Receiving,
}

impl PrimaryStat {
    /// Candidate order for best-change selection; earlier entries win ties.
    pub const ALL: [PrimaryStat; 3] = [
        PrimaryStat::Passing,
        PrimaryStat::Rushing,
        PrimaryStat::Receiving,
    ];

    pub fn category(&self) -> StatCategory {
        match self {
            PrimaryStat::Passing => StatCategory::PassingYards,
            PrimaryStat::Rushing => StatCategory::RushingYards,
            PrimaryStat::Receiving => StatCategory::ReceivingYards,
        }
    }

    /// Label shown by the front-end.
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryStat::Passing => "Passing Yds",
            PrimaryStat::Rushing => "Rushing Yds",
            PrimaryStat::Receiving => "Receiving Yds",
        }
    }
}

impl fmt::Display for PrimaryStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_key_parse_matches_display() {
        for category in StatCategory::ALL {
            let parsed: StatCategory = category.key().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert_eq!(
            "Receiving_Yards".parse::<StatCategory>().unwrap(),
            StatCategory::ReceivingYards
        );
        assert!("fumbles".parse::<StatCategory>().is_err());
    }

    #[test]
    fn test_primary_stat_categories() {
        assert_eq!(PrimaryStat::Passing.category(), StatCategory::PassingYards);
        assert_eq!(PrimaryStat::Rushing.category(), StatCategory::RushingYards);
        assert_eq!(PrimaryStat::Receiving.category(), StatCategory::ReceivingYards);
        assert_eq!(PrimaryStat::Rushing.label(), "Rushing Yds");
    }
}
