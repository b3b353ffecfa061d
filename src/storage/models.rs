//! Data models for the storage layer
//!
//! Input records mirror the database rows (and the import snapshot) with
//! every field optional, so incomplete rows can be read and then rejected
//! with a reason instead of failing the whole load.

use crate::analysis::{PlayerGameStat, PlayerKey};
use crate::cli::types::{Position, StatCategory, Week};
use crate::error::{InsightsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One player's box score for one game, as stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStatRecord {
    pub player_name: Option<String>,
    pub position: Option<String>,
    pub team: Option<String>,
    pub week: Option<u16>,
    pub passing_attempts: Option<f64>,
    pub completions: Option<f64>,
    pub passing_yards: Option<f64>,
    pub passing_tds: Option<f64>,
    pub interceptions: Option<f64>,
    pub rushing_attempts: Option<f64>,
    pub rushing_yards: Option<f64>,
    pub rushing_tds: Option<f64>,
    pub receptions: Option<f64>,
    pub receiving_yards: Option<f64>,
    pub receiving_tds: Option<f64>,
}

impl GameStatRecord {
    pub fn stat(&self, category: StatCategory) -> Option<f64> {
        match category {
            StatCategory::PassingAttempts => self.passing_attempts,
            StatCategory::Completions => self.completions,
            StatCategory::PassingYards => self.passing_yards,
            StatCategory::PassingTds => self.passing_tds,
            StatCategory::Interceptions => self.interceptions,
            StatCategory::RushingAttempts => self.rushing_attempts,
            StatCategory::RushingYards => self.rushing_yards,
            StatCategory::RushingTds => self.rushing_tds,
            StatCategory::Receptions => self.receptions,
            StatCategory::ReceivingYards => self.receiving_yards,
            StatCategory::ReceivingTds => self.receiving_tds,
        }
    }

    pub fn set_stat(&mut self, category: StatCategory, value: Option<f64>) {
        let slot = match category {
            StatCategory::PassingAttempts => &mut self.passing_attempts,
            StatCategory::Completions => &mut self.completions,
            StatCategory::PassingYards => &mut self.passing_yards,
            StatCategory::PassingTds => &mut self.passing_tds,
            StatCategory::Interceptions => &mut self.interceptions,
            StatCategory::RushingAttempts => &mut self.rushing_attempts,
            StatCategory::RushingYards => &mut self.rushing_yards,
            StatCategory::RushingTds => &mut self.rushing_tds,
            StatCategory::Receptions => &mut self.receptions,
            StatCategory::ReceivingYards => &mut self.receiving_yards,
            StatCategory::ReceivingTds => &mut self.receiving_tds,
        };
        *slot = value;
    }

    #[cfg(test)]
    pub(crate) fn test_with_fields(
        name: &str,
        position: &str,
        team: &str,
        week: u16,
        stats: &[(StatCategory, f64)],
    ) -> Self {
        let mut record = Self {
            player_name: Some(name.to_string()),
            position: Some(position.to_string()),
            team: Some(team.to_string()),
            week: Some(week),
            ..Self::default()
        };
        for (category, value) in stats {
            record.set_stat(*category, Some(*value));
        }
        record
    }
}

impl From<&PlayerGameStat> for GameStatRecord {
    fn from(game: &PlayerGameStat) -> Self {
        let mut record = Self {
            player_name: Some(game.player.name.clone()),
            position: Some(game.player.position.to_string()),
            team: Some(game.team.clone()),
            week: Some(game.week.as_u16()),
            ..Self::default()
        };
        for (&category, &value) in &game.stats {
            record.set_stat(category, Some(value));
        }
        record
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| InsightsError::MalformedRow {
        reason: format!("missing {}", field),
    })
}

fn required_text(value: &Option<String>, field: &str) -> Result<String> {
    match value.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(InsightsError::MalformedRow {
            reason: format!("missing {}", field),
        }),
    }
}

fn malformed(err: InsightsError) -> InsightsError {
    InsightsError::MalformedRow {
        reason: err.to_string(),
    }
}

impl TryFrom<&GameStatRecord> for PlayerGameStat {
    type Error = InsightsError;

    fn try_from(record: &GameStatRecord) -> Result<Self> {
        let name = required_text(&record.player_name, "player_name")?;
        let position: Position = required_text(&record.position, "position")?
            .parse()
            .map_err(malformed)?;
        let team = required_text(&record.team, "team")?;
        let week = Week::checked(required(record.week, "week")?).map_err(malformed)?;

        let mut stats = BTreeMap::new();
        for category in StatCategory::ALL {
            if let Some(value) = record.stat(category) {
                if !value.is_finite() || (value < 0.0 && !category.is_yardage()) {
                    return Err(InsightsError::MalformedRow {
                        reason: format!("invalid {} value {}", category, value),
                    });
                }
                stats.insert(category, value);
            }
        }

        Ok(PlayerGameStat {
            player: PlayerKey::new(name, position),
            team,
            week,
            stats,
        })
    }
}

/// One team's opponent for one week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleRecord {
    pub week: Option<u16>,
    pub team: Option<String>,
    pub opponent: Option<String>,
}

impl ScheduleRecord {
    /// Validated (week, team, opponent).
    pub fn parts(&self) -> Result<(Week, String, String)> {
        let week = Week::checked(required(self.week, "week")?).map_err(malformed)?;
        Ok((
            week,
            required_text(&self.team, "team")?,
            required_text(&self.opponent, "opponent")?,
        ))
    }
}

/// Average allowed by one defense to one position group for one stat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefenseRecord {
    pub team: Option<String>,
    pub position: Option<String>,
    pub stat: Option<String>,
    pub value: Option<f64>,
}

impl DefenseRecord {
    pub fn parts(&self) -> Result<(String, Position, StatCategory, f64)> {
        Ok((
            required_text(&self.team, "team")?,
            required_text(&self.position, "position")?
                .parse()
                .map_err(malformed)?,
            required_text(&self.stat, "stat")?.parse().map_err(malformed)?,
            required(self.value, "value")?,
        ))
    }
}

/// League-wide average allowed to one position group for one stat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueRecord {
    pub position: Option<String>,
    pub stat: Option<String>,
    pub value: Option<f64>,
}

impl LeagueRecord {
    pub fn parts(&self) -> Result<(Position, StatCategory, f64)> {
        Ok((
            required_text(&self.position, "position")?
                .parse()
                .map_err(malformed)?,
            required_text(&self.stat, "stat")?.parse().map_err(malformed)?,
            required(self.value, "value")?,
        ))
    }
}

/// A row of the `hot_cold_players` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotColdRow {
    pub player_name: String,
    pub position: String,
    pub stat: String,
    pub recent_average: f64,
    pub season_average: f64,
    pub percentage_change: f64,
    pub trend: String,
}

/// A row of the `players_to_watch` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchRow {
    pub normalized_name: String,
    pub player_name: String,
    pub position: String,
    pub stat_to_display: String,
    pub last_3_avg: f64,
    pub season_avg: f64,
    pub opponent: String,
    pub matchup_type: String,
    pub performance_type: String,
}

/// A row of the `player_projections` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub player_name: String,
    pub normalized_name: String,
    pub position: String,
    pub opponent: String,
    pub stat_key: String,
    pub projection: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_record_conversion() {
        let record = GameStatRecord::test_with_fields(
            "Test Player",
            "wr",
            "CIN",
            7,
            &[(StatCategory::ReceivingYards, 112.0), (StatCategory::Receptions, 9.0)],
        );
        let game = PlayerGameStat::try_from(&record).unwrap();
        assert_eq!(game.player.position, Position::WR);
        assert_eq!(game.week, Week::new(7));
        assert_eq!(game.value(StatCategory::ReceivingYards), 112.0);
        assert_eq!(game.stats.len(), 2);
    }

    #[test]
    fn test_game_record_missing_fields_is_malformed() {
        let mut record = GameStatRecord::test_with_fields("P", "RB", "NYG", 2, &[]);
        record.team = None;
        assert!(matches!(
            PlayerGameStat::try_from(&record),
            Err(InsightsError::MalformedRow { .. })
        ));

        let mut record = GameStatRecord::test_with_fields("P", "RB", "NYG", 2, &[]);
        record.player_name = Some("   ".to_string());
        assert!(PlayerGameStat::try_from(&record).is_err());

        let record = GameStatRecord::test_with_fields("P", "LS", "NYG", 2, &[]);
        assert!(PlayerGameStat::try_from(&record).is_err());

        let record = GameStatRecord::test_with_fields("P", "RB", "NYG", 22, &[]);
        assert!(PlayerGameStat::try_from(&record).is_err());
    }

    #[test]
    fn test_negative_yards_allowed_but_not_negative_counts() {
        let record = GameStatRecord::test_with_fields(
            "P",
            "QB",
            "NE",
            3,
            &[(StatCategory::RushingYards, -4.0)],
        );
        assert!(PlayerGameStat::try_from(&record).is_ok());

        let record = GameStatRecord::test_with_fields(
            "P",
            "WR",
            "NE",
            3,
            &[(StatCategory::Receptions, -1.0)],
        );
        assert!(PlayerGameStat::try_from(&record).is_err());
    }

    #[test]
    fn test_reference_record_parts() {
        let defense = DefenseRecord {
            team: Some("SEA".to_string()),
            position: Some("TE".to_string()),
            stat: Some("receiving_yards".to_string()),
            value: Some(55.2),
        };
        let (team, position, stat, value) = defense.parts().unwrap();
        assert_eq!(team, "SEA");
        assert_eq!(position, Position::TE);
        assert_eq!(stat, StatCategory::ReceivingYards);
        assert_eq!(value, 55.2);

        let league = LeagueRecord {
            position: Some("QB".to_string()),
            stat: Some("sacks".to_string()),
            value: Some(2.0),
        };
        assert!(league.parts().is_err());

        let schedule = ScheduleRecord {
            week: Some(5),
            team: Some("KC".to_string()),
            opponent: None,
        };
        assert!(schedule.parts().is_err());
    }
}
