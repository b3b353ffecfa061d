//! NFL position types and utilities.

use super::stat::{PrimaryStat, StatCategory};
use crate::error::InsightsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Offensive and special-teams positions tracked in game stats.
///
/// Only QB, RB, WR and TE take part in classification, projections and
/// leaders. K and DEF rows are accepted on import and ignored downstream.
///
/// # Examples
///
/// ```rust
/// use nfl_insights::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!(qb.to_string(), "QB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
}

impl Position {
    /// Positions with offensive skill stats, in display order.
    pub const SKILL: [Position; 4] = [Position::QB, Position::RB, Position::WR, Position::TE];

    /// The yardage stat that best represents this position's role.
    ///
    /// Positions without a natural yardage role fall back to passing.
    pub fn primary_stat(&self) -> PrimaryStat {
        match self {
            Position::QB => PrimaryStat::Passing,
            Position::RB => PrimaryStat::Rushing,
            Position::WR | Position::TE => PrimaryStat::Receiving,
            Position::K | Position::DEF => PrimaryStat::Passing,
        }
    }

    /// Stat keys projected for this position.
    pub fn projection_stats(&self) -> &'static [StatCategory] {
        use StatCategory::*;
        match self {
            Position::QB => &[
                PassingAttempts,
                Completions,
                PassingYards,
                PassingTds,
                Interceptions,
                RushingAttempts,
                RushingYards,
                RushingTds,
            ],
            Position::RB => &[
                RushingAttempts,
                RushingYards,
                RushingTds,
                Receptions,
                ReceivingYards,
                ReceivingTds,
            ],
            Position::WR | Position::TE => &[
                Receptions,
                ReceivingYards,
                ReceivingTds,
                RushingAttempts,
                RushingYards,
                RushingTds,
            ],
            Position::K | Position::DEF => &[],
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
        };
        f.pad(s)
    }
}

impl FromStr for Position {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" | "FB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" | "PK" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            _ => Err(InsightsError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
