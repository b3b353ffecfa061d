//! Read side: the rows every generator starts from.

use super::{models::*, schema::InsightsDatabase};
use crate::cli::types::Week;
use crate::error::{InsightsError, Result};
use rusqlite::{params, Row};

/// One row read from a source table.
///
/// `Err` means the stored values could not be read as the expected types
/// (SQLite does not enforce column types). The query itself still succeeded
/// and the remaining rows are returned.
pub type SourceRow<T> = Result<T>;

/// Source of raw stat and reference rows.
///
/// Rows come back unvalidated; callers convert them and skip the
/// malformed ones.
pub trait StatSource {
    /// Every game row up to and including `through`.
    fn game_stats(&self, through: Week) -> Result<Vec<SourceRow<GameStatRecord>>>;

    /// Team → opponent pairs for `week`.
    fn schedule(&self, week: Week) -> Result<Vec<SourceRow<ScheduleRecord>>>;

    fn defense_averages(&self) -> Result<Vec<SourceRow<DefenseRecord>>>;

    fn league_averages(&self) -> Result<Vec<SourceRow<LeagueRecord>>>;
}

pub(crate) const GAME_STAT_COLUMNS: &str = "player_name, position, team, week,
    passing_attempts, completions, passing_yards, passing_tds, interceptions,
    rushing_attempts, rushing_yards, rushing_tds,
    receptions, receiving_yards, receiving_tds";

fn row_to_game_stat(row: &Row) -> rusqlite::Result<GameStatRecord> {
    Ok(GameStatRecord {
        player_name: row.get(0)?,
        position: row.get(1)?,
        team: row.get(2)?,
        week: row.get(3)?,
        passing_attempts: row.get(4)?,
        completions: row.get(5)?,
        passing_yards: row.get(6)?,
        passing_tds: row.get(7)?,
        interceptions: row.get(8)?,
        rushing_attempts: row.get(9)?,
        rushing_yards: row.get(10)?,
        rushing_tds: row.get(11)?,
        receptions: row.get(12)?,
        receiving_yards: row.get(13)?,
        receiving_tds: row.get(14)?,
    })
}

/// Collect mapped rows, keeping per-row type conversion failures as
/// malformed rows. Any other error aborts the read.
fn collect_rows<T>(
    rows: impl Iterator<Item = rusqlite::Result<T>>,
) -> Result<Vec<SourceRow<T>>> {
    let mut records = Vec::new();
    for row in rows {
        match row {
            Ok(record) => records.push(Ok(record)),
            Err(
                e @ (rusqlite::Error::InvalidColumnType(..)
                | rusqlite::Error::FromSqlConversionFailure(..)
                | rusqlite::Error::IntegralValueOutOfRange(..)),
            ) => records.push(Err(InsightsError::MalformedRow {
                reason: e.to_string(),
            })),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(records)
}

impl StatSource for InsightsDatabase {
    fn game_stats(&self, through: Week) -> Result<Vec<SourceRow<GameStatRecord>>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM game_stats
             WHERE week <= ?
             ORDER BY player_name, position, week",
            GAME_STAT_COLUMNS
        ))?;

        let rows = stmt.query_map(params![through.as_u16()], row_to_game_stat)?;
        collect_rows(rows)
    }

    fn schedule(&self, week: Week) -> Result<Vec<SourceRow<ScheduleRecord>>> {
        let mut stmt = self.conn.prepare(
            "SELECT week, team, opponent FROM team_schedule WHERE week = ? ORDER BY team",
        )?;

        let rows = stmt.query_map(params![week.as_u16()], |row| {
            Ok(ScheduleRecord {
                week: row.get(0)?,
                team: row.get(1)?,
                opponent: row.get(2)?,
            })
        })?;
        collect_rows(rows)
    }

    fn defense_averages(&self) -> Result<Vec<SourceRow<DefenseRecord>>> {
        let mut stmt = self.conn.prepare(
            "SELECT team, position, stat, value FROM defense_averages
             ORDER BY team, position, stat",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(DefenseRecord {
                team: row.get(0)?,
                position: row.get(1)?,
                stat: row.get(2)?,
                value: row.get(3)?,
            })
        })?;
        collect_rows(rows)
    }

    fn league_averages(&self) -> Result<Vec<SourceRow<LeagueRecord>>> {
        let mut stmt = self
            .conn
            .prepare("SELECT position, stat, value FROM league_averages ORDER BY position, stat")?;

        let rows = stmt.query_map([], |row| {
            Ok(LeagueRecord {
                position: row.get(0)?,
                stat: row.get(1)?,
                value: row.get(2)?,
            })
        })?;
        collect_rows(rows)
    }
}
