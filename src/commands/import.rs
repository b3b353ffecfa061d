//! Load a JSON snapshot of source data into the database.
//!
//! The snapshot is an object with four optional arrays:
//!
//! ```json
//! {
//!   "games":    [{"player_name": "...", "position": "QB", "team": "KC", "week": 1, "passing_yards": 280.0}],
//!   "schedule": [{"week": 2, "team": "KC", "opponent": "LV"}],
//!   "defense":  [{"team": "LV", "position": "QB", "stat": "passing_yards", "value": 241.5}],
//!   "league":   [{"position": "QB", "stat": "passing_yards", "value": 225.0}]
//! }
//! ```
//!
//! Rows are validated one by one; a bad row is skipped and counted, never
//! fatal. Accepted rows are stored in canonical form (upper-case positions,
//! snake_case stat keys).

use std::fmt;
use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{
    analysis::PlayerGameStat,
    error::InsightsError,
    storage::{DefenseRecord, GameStatRecord, InsightsDatabase, LeagueRecord, ScheduleRecord},
    Result, Week,
};

use super::common::CommandContext;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Snapshot {
    games: Vec<Value>,
    schedule: Vec<Value>,
    defense: Vec<Value>,
    league: Vec<Value>,
}

/// Validated rows ready to store.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImportBatch {
    pub games: Vec<GameStatRecord>,
    pub schedule: Vec<(Week, String, String)>,
    pub defense: Vec<DefenseRecord>,
    pub league: Vec<LeagueRecord>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub games: usize,
    pub schedule: usize,
    pub defense: usize,
    pub league: usize,
    pub malformed: usize,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "import summary")?;
        writeln!(f, "  game rows:       {}", self.games)?;
        writeln!(f, "  schedule rows:   {}", self.schedule)?;
        writeln!(f, "  defense rows:    {}", self.defense)?;
        writeln!(f, "  league rows:     {}", self.league)?;
        write!(f, "  malformed rows skipped: {}", self.malformed)
    }
}

fn parse_rows<T, U>(
    kind: &str,
    rows: Vec<Value>,
    convert: impl Fn(T) -> Result<U>,
    malformed: &mut usize,
) -> Vec<U>
where
    T: DeserializeOwned,
{
    let mut accepted = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let outcome = serde_json::from_value::<T>(row)
            .map_err(InsightsError::from)
            .and_then(&convert);
        match outcome {
            Ok(value) => accepted.push(value),
            Err(e) => {
                tracing::warn!(kind, index = i, error = %e, "skipping snapshot row");
                *malformed += 1;
            }
        }
    }
    accepted
}

/// Parse and validate a snapshot document.
///
/// Fails only when the document itself is not a JSON object of arrays.
pub fn parse_snapshot(json: &str) -> Result<(ImportBatch, usize)> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    let mut malformed = 0;

    let games = parse_rows(
        "game",
        snapshot.games,
        |record: GameStatRecord| {
            let game = PlayerGameStat::try_from(&record)?;
            Ok(GameStatRecord::from(&game))
        },
        &mut malformed,
    );
    let schedule = parse_rows(
        "schedule",
        snapshot.schedule,
        |record: ScheduleRecord| record.parts(),
        &mut malformed,
    );
    let defense = parse_rows(
        "defense",
        snapshot.defense,
        |record: DefenseRecord| {
            let (team, position, stat, value) = record.parts()?;
            Ok(DefenseRecord {
                team: Some(team),
                position: Some(position.to_string()),
                stat: Some(stat.key().to_string()),
                value: Some(value),
            })
        },
        &mut malformed,
    );
    let league = parse_rows(
        "league",
        snapshot.league,
        |record: LeagueRecord| {
            let (position, stat, value) = record.parts()?;
            Ok(LeagueRecord {
                position: Some(position.to_string()),
                stat: Some(stat.key().to_string()),
                value: Some(value),
            })
        },
        &mut malformed,
    );

    Ok((
        ImportBatch {
            games,
            schedule,
            defense,
            league,
        },
        malformed,
    ))
}

/// Store a validated batch. Each table is written in its own transaction.
pub fn store_batch(db: &mut InsightsDatabase, batch: &ImportBatch) -> Result<ImportSummary> {
    Ok(ImportSummary {
        games: db.upsert_game_stats(&batch.games)?,
        schedule: db.upsert_schedule(&batch.schedule)?,
        defense: db.upsert_defense_averages(&batch.defense)?,
        league: db.upsert_league_averages(&batch.league)?,
        malformed: 0,
    })
}

/// Import the snapshot at `path`.
pub fn handle_import(ctx: &mut CommandContext, path: &Path) -> Result<ImportSummary> {
    let _lock = ctx.lock()?;
    let contents = std::fs::read_to_string(path)?;
    let (batch, malformed) = parse_snapshot(&contents)?;

    let summary = ImportSummary {
        malformed,
        ..store_batch(&mut ctx.db, &batch)?
    };
    tracing::info!(path = %path.display(), games = summary.games, "snapshot imported");
    println!("{}", summary);

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{Position, StatCategory};
    use crate::storage::StatSource;

    const SNAPSHOT: &str = r#"{
        "games": [
            {"player_name": "Test QB", "position": "qb", "team": "KC", "week": 1, "passing_yards": 280.0},
            {"player_name": "Test QB", "position": "QB", "team": "KC", "week": 2, "passing_yards": "lots"},
            {"player_name": "", "position": "QB", "team": "KC", "week": 3},
            {"player_name": "Kicker", "position": "LS", "team": "KC", "week": 3}
        ],
        "schedule": [
            {"week": 2, "team": "KC", "opponent": "LV"},
            {"week": 40, "team": "KC", "opponent": "LV"}
        ],
        "defense": [
            {"team": "LV", "position": "qb", "stat": "Passing_Yards", "value": 241.5}
        ],
        "league": [
            {"position": "QB", "stat": "passing_yards"}
        ]
    }"#;

    #[test]
    fn test_parse_snapshot_skips_malformed_rows() {
        let (batch, malformed) = parse_snapshot(SNAPSHOT).unwrap();
        assert_eq!(batch.games.len(), 1);
        assert_eq!(batch.schedule.len(), 1);
        assert_eq!(batch.defense.len(), 1);
        assert!(batch.league.is_empty());
        assert_eq!(malformed, 5);
    }

    #[test]
    fn test_parse_snapshot_canonicalizes() {
        let (batch, _) = parse_snapshot(SNAPSHOT).unwrap();
        assert_eq!(batch.games[0].position.as_deref(), Some("QB"));
        assert_eq!(batch.games[0].stat(StatCategory::PassingYards), Some(280.0));
        assert_eq!(batch.defense[0].stat.as_deref(), Some("passing_yards"));
        assert_eq!(
            batch.defense[0].position.as_deref(),
            Some(Position::QB.to_string().as_str())
        );
    }

    #[test]
    fn test_parse_snapshot_rejects_non_object() {
        assert!(parse_snapshot("[1, 2, 3]").is_err());
        assert!(parse_snapshot("not json").is_err());
    }

    #[test]
    fn test_empty_snapshot() {
        let (batch, malformed) = parse_snapshot("{}").unwrap();
        assert_eq!(batch, ImportBatch::default());
        assert_eq!(malformed, 0);
    }

    #[test]
    fn test_store_batch() {
        let mut db = InsightsDatabase::new_in_memory().unwrap();
        let (batch, _) = parse_snapshot(SNAPSHOT).unwrap();
        let summary = store_batch(&mut db, &batch).unwrap();
        assert_eq!(summary.games, 1);
        assert_eq!(summary.schedule, 1);

        let games = db.game_stats(Week::new(18)).unwrap();
        assert_eq!(games.len(), 1);
        let game = games[0].as_ref().unwrap();
        assert_eq!(game.player_name.as_deref(), Some("Test QB"));
        assert_eq!(db.schedule(Week::new(2)).unwrap().len(), 1);
    }
}
