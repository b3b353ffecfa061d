//! Opponent matchup scoring.

use super::classify::{ClassificationResult, Trend};
use super::reference::{defense_group, ReferenceData};
use super::summary::FilterReason;
use crate::cli::types::{Position, StatCategory};
use crate::config::MatchupThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchupTier {
    Great,
    Good,
    Bad,
}

impl MatchupTier {
    pub fn label(&self) -> &'static str {
        match self {
            MatchupTier::Great => "Great Matchup",
            MatchupTier::Good => "Good Matchup",
            MatchupTier::Bad => "Bad Matchup",
        }
    }

    pub fn is_favorable(&self) -> bool {
        matches!(self, MatchupTier::Great | MatchupTier::Good)
    }
}

impl fmt::Display for MatchupTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// League average minus the opponent's average allowed.
pub fn matchup_score(league_average: f64, defense_average: f64) -> f64 {
    league_average - defense_average
}

pub fn matchup_tier(score: f64, thresholds: &MatchupThresholds) -> MatchupTier {
    if score > thresholds.great_above {
        MatchupTier::Great
    } else if score > 0.0 {
        MatchupTier::Good
    } else {
        MatchupTier::Bad
    }
}

/// A rising player needs a favorable matchup; a slumping one an unfavorable one.
pub fn supports_trend(tier: MatchupTier, trend: Trend) -> bool {
    if trend.is_positive() {
        tier.is_favorable()
    } else {
        !tier.is_favorable()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupAssessment {
    pub opponent: String,
    pub score: f64,
    pub tier: MatchupTier,
}

/// A players-to-watch entry: a classified player whose trend the next
/// matchup supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedPlayer {
    pub classification: ClassificationResult,
    pub normalized_name: String,
    pub matchup: MatchupAssessment,
}

/// Score a team's next matchup for one stat.
///
/// Missing opponents and missing baselines are skip reasons, not errors.
/// A zero defense average counts as missing.
pub fn assess_matchup(
    reference: &ReferenceData,
    team: &str,
    position: Position,
    category: StatCategory,
    thresholds: &MatchupThresholds,
) -> Result<MatchupAssessment, FilterReason> {
    let opponent = reference
        .schedule
        .opponent(team)
        .ok_or(FilterReason::NoOpponent)?;

    let group = defense_group(position, category);
    let defense = reference
        .defense
        .get(opponent, group, category)
        .filter(|v| *v != 0.0)
        .ok_or(FilterReason::MissingDefenseAverage)?;
    let league = reference
        .league
        .get(group, category)
        .ok_or(FilterReason::MissingLeagueAverage)?;

    let score = matchup_score(league, defense);
    Ok(MatchupAssessment {
        opponent: opponent.to_string(),
        score,
        tier: matchup_tier(score, thresholds),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let t = MatchupThresholds::default();
        assert_eq!(matchup_tier(20.0, &t), MatchupTier::Good);
        assert_eq!(matchup_tier(20.01, &t), MatchupTier::Great);
        assert_eq!(matchup_tier(0.0, &t), MatchupTier::Bad);
        assert_eq!(matchup_tier(0.01, &t), MatchupTier::Good);
        assert_eq!(matchup_tier(-35.0, &t), MatchupTier::Bad);
    }

    #[test]
    fn test_score_direction() {
        assert_eq!(matchup_score(250.0, 220.0), 30.0);
        assert_eq!(matchup_score(250.0, 270.0), -20.0);
    }

    #[test]
    fn test_trend_gate() {
        assert!(supports_trend(MatchupTier::Great, Trend::Overperforming));
        assert!(supports_trend(MatchupTier::Good, Trend::Overperforming));
        assert!(!supports_trend(MatchupTier::Bad, Trend::Overperforming));
        assert!(supports_trend(MatchupTier::Bad, Trend::Underperforming));
        assert!(!supports_trend(MatchupTier::Good, Trend::Underperforming));
    }

    fn reference() -> ReferenceData {
        let mut reference = ReferenceData::default();
        reference.schedule.insert("KC", "LV");
        reference.schedule.insert("BUF", "NYJ");
        reference.schedule.insert("DAL", "PHI");
        reference.defense.set("LV", Position::QB, StatCategory::PassingYards, 215.0);
        reference.defense.set("NYJ", Position::QB, StatCategory::PassingYards, 0.0);
        reference.league.set(Position::QB, StatCategory::PassingYards, 240.0);
        reference
    }

    #[test]
    fn test_assess_matchup() {
        let t = MatchupThresholds::default();
        let assessment =
            assess_matchup(&reference(), "KC", Position::QB, StatCategory::PassingYards, &t)
                .unwrap();
        assert_eq!(assessment.opponent, "LV");
        assert_eq!(assessment.score, 25.0);
        assert_eq!(assessment.tier, MatchupTier::Great);
    }

    #[test]
    fn test_assess_matchup_missing_data() {
        let t = MatchupThresholds::default();
        let reference = reference();

        assert_eq!(
            assess_matchup(&reference, "SF", Position::QB, StatCategory::PassingYards, &t),
            Err(FilterReason::NoOpponent)
        );
        assert_eq!(
            assess_matchup(&reference, "BUF", Position::QB, StatCategory::PassingYards, &t),
            Err(FilterReason::MissingDefenseAverage)
        );
        assert_eq!(
            assess_matchup(&reference, "DAL", Position::QB, StatCategory::PassingYards, &t),
            Err(FilterReason::MissingDefenseAverage)
        );
        assert_eq!(
            assess_matchup(&reference, "KC", Position::RB, StatCategory::RushingYards, &t),
            Err(FilterReason::MissingDefenseAverage)
        );
    }
}
