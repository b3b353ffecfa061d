//! Loading source rows and reading back generated tables

use super::source::GAME_STAT_COLUMNS;
use super::{models::*, schema::InsightsDatabase};
use crate::analysis::{MatchupRanking, WeeklyLeader};
use crate::cli::types::{Position, Week};
use crate::error::{InsightsError, Result};
use rusqlite::params;

impl InsightsDatabase {
    /// Insert or replace game rows keyed by (player, position, week).
    pub fn upsert_game_stats(&mut self, records: &[GameStatRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(&format!(
                "INSERT OR REPLACE INTO game_stats ({})
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                GAME_STAT_COLUMNS
            ))?;
            for r in records {
                stmt.execute(params![
                    r.player_name,
                    r.position,
                    r.team,
                    r.week,
                    r.passing_attempts,
                    r.completions,
                    r.passing_yards,
                    r.passing_tds,
                    r.interceptions,
                    r.rushing_attempts,
                    r.rushing_yards,
                    r.rushing_tds,
                    r.receptions,
                    r.receiving_yards,
                    r.receiving_tds,
                ])?;
            }
        }
        tx.commit()?;
        Ok(records.len())
    }

    pub fn upsert_schedule(&mut self, entries: &[(Week, String, String)]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO team_schedule (week, team, opponent) VALUES (?, ?, ?)",
            )?;
            for (week, team, opponent) in entries {
                stmt.execute(params![week.as_u16(), team, opponent])?;
            }
        }
        tx.commit()?;
        Ok(entries.len())
    }

    pub fn upsert_defense_averages(&mut self, records: &[DefenseRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO defense_averages (team, position, stat, value)
                 VALUES (?, ?, ?, ?)",
            )?;
            for r in records {
                stmt.execute(params![r.team, r.position, r.stat, r.value])?;
            }
        }
        tx.commit()?;
        Ok(records.len())
    }

    pub fn upsert_league_averages(&mut self, records: &[LeagueRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO league_averages (position, stat, value) VALUES (?, ?, ?)",
            )?;
            for r in records {
                stmt.execute(params![r.position, r.stat, r.value])?;
            }
        }
        tx.commit()?;
        Ok(records.len())
    }

    pub fn get_hot_cold(&self) -> Result<Vec<HotColdRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_name, position, stat, recent_average, season_average,
                    percentage_change, trend
             FROM hot_cold_players
             ORDER BY ABS(percentage_change) DESC, player_name",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(HotColdRow {
                player_name: row.get(0)?,
                position: row.get(1)?,
                stat: row.get(2)?,
                recent_average: row.get(3)?,
                season_average: row.get(4)?,
                percentage_change: row.get(5)?,
                trend: row.get(6)?,
            })
        })?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    pub fn get_players_to_watch(&self) -> Result<Vec<WatchRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT normalized_name, player_name, position, stat_to_display, last_3_avg,
                    season_avg, opponent, matchup_type, performance_type
             FROM players_to_watch
             ORDER BY player_name, position",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(WatchRow {
                normalized_name: row.get(0)?,
                player_name: row.get(1)?,
                position: row.get(2)?,
                stat_to_display: row.get(3)?,
                last_3_avg: row.get(4)?,
                season_avg: row.get(5)?,
                opponent: row.get(6)?,
                matchup_type: row.get(7)?,
                performance_type: row.get(8)?,
            })
        })?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    pub fn get_projections(&self) -> Result<Vec<ProjectionRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_name, normalized_name, position, opponent, stat_key, projection
             FROM player_projections
             ORDER BY player_name, position, stat_key",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(ProjectionRow {
                player_name: row.get(0)?,
                normalized_name: row.get(1)?,
                position: row.get(2)?,
                opponent: row.get(3)?,
                stat_key: row.get(4)?,
                projection: row.get(5)?,
            })
        })?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    pub fn get_weekly_leaders(&self, week: Week) -> Result<Vec<WeeklyLeader>> {
        let mut stmt = self.conn.prepare(
            "SELECT week, position, rank, player_name, stat_value, matchup
             FROM weekly_leaders
             WHERE week = ?
             ORDER BY position, rank",
        )?;

        let rows = stmt.query_map(params![week.as_u16()], |row| {
            Ok((
                row.get::<_, u16>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, u32>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, f64>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut result = Vec::new();
        for row in rows {
            let (week, position, rank, player_name, stat_value, matchup) = row?;
            let Ok(position) = position.parse::<Position>() else {
                tracing::warn!(%position, "skipping leader row with unknown position");
                continue;
            };
            result.push(WeeklyLeader {
                week: Week::new(week),
                position,
                rank,
                player_name,
                stat_value,
                matchup,
            });
        }
        Ok(result)
    }

    pub fn get_matchup_rankings(&self) -> Result<Vec<MatchupRanking>> {
        let mut stmt = self.conn.prepare(
            "SELECT position, team, avg_stat, yards_above_avg, rank
             FROM defensive_matchup_rankings
             ORDER BY position, rank",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, f64>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, u32>(4)?,
            ))
        })?;

        let mut result = Vec::new();
        for row in rows {
            let (position, team, avg_stat, yards_above_avg, rank) = row?;
            let Ok(position) = position.parse::<Position>() else {
                tracing::warn!(%position, "skipping ranking row with unknown position");
                continue;
            };
            result.push(MatchupRanking {
                position,
                team,
                avg_stat,
                yards_above_avg,
                rank,
            });
        }
        Ok(result)
    }

    /// Number of rows in one of the known tables.
    pub fn count_rows(&self, table: &str) -> Result<usize> {
        const TABLES: [&str; 9] = [
            "game_stats",
            "team_schedule",
            "defense_averages",
            "league_averages",
            "hot_cold_players",
            "players_to_watch",
            "player_projections",
            "weekly_leaders",
            "defensive_matchup_rankings",
        ];
        let Some(table) = TABLES.iter().find(|t| **t == table) else {
            return Err(InsightsError::UnknownTable {
                table: table.to_string(),
            });
        };
        let count: i64 =
            self.conn
                .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
