//! Write side: persisting generator output.

use super::schema::InsightsDatabase;
use crate::analysis::{ClassificationResult, MatchupRanking, Projection, WatchedPlayer, WeeklyLeader};
use crate::cli::types::Week;
use crate::error::Result;
use rusqlite::params;
use std::time::{SystemTime, UNIX_EPOCH};

/// Destination for generated insight tables.
///
/// `replace_*` methods swap the whole table in one transaction so readers
/// never see a half-written result. `upsert_*` methods keep rows for
/// other keys and overwrite matching ones.
///
/// Implementations assume a single writer; callers hold a
/// [`RunLock`](super::lock::RunLock) for the duration of a run.
pub trait ResultSink {
    fn replace_hot_cold(&mut self, results: &[ClassificationResult]) -> Result<usize>;

    fn replace_players_to_watch(&mut self, players: &[WatchedPlayer]) -> Result<usize>;

    fn replace_projections(&mut self, projections: &[Projection]) -> Result<usize>;

    /// Keyed by (week, position, rank). Rows already stored for `week` that
    /// this batch does not produce are removed; other weeks are kept.
    fn upsert_weekly_leaders(&mut self, week: Week, leaders: &[WeeklyLeader]) -> Result<usize>;

    /// Keyed by (position, team).
    fn upsert_matchup_rankings(&mut self, rankings: &[MatchupRanking]) -> Result<usize>;
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

impl ResultSink for InsightsDatabase {
    fn replace_hot_cold(&mut self, results: &[ClassificationResult]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM hot_cold_players", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO hot_cold_players
                    (player_name, position, stat, recent_average, season_average,
                     percentage_change, trend)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )?;
            for r in results {
                stmt.execute(params![
                    r.player.name,
                    r.player.position.to_string(),
                    r.primary.label(),
                    r.recent_average,
                    r.season_average,
                    r.percent_change,
                    r.trend.label(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(results.len())
    }

    fn replace_players_to_watch(&mut self, players: &[WatchedPlayer]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM players_to_watch", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO players_to_watch
                    (normalized_name, player_name, position, stat_to_display, last_3_avg,
                     season_avg, opponent, matchup_type, performance_type)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for p in players {
                let c = &p.classification;
                stmt.execute(params![
                    p.normalized_name,
                    c.player.name,
                    c.player.position.to_string(),
                    c.primary.label(),
                    c.recent_average,
                    c.season_average,
                    p.matchup.opponent,
                    p.matchup.tier.label(),
                    c.trend.label(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(players.len())
    }

    fn replace_projections(&mut self, projections: &[Projection]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM player_projections", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO player_projections
                    (player_name, normalized_name, position, opponent, stat_key, projection)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )?;
            for p in projections {
                stmt.execute(params![
                    p.player.name,
                    p.normalized_name,
                    p.player.position.to_string(),
                    p.opponent,
                    p.stat.key(),
                    p.projection,
                ])?;
            }
        }
        tx.commit()?;
        Ok(projections.len())
    }

    fn upsert_weekly_leaders(&mut self, week: Week, leaders: &[WeeklyLeader]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM weekly_leaders WHERE week = ?",
            params![week.as_u16()],
        )?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO weekly_leaders
                    (week, position, rank, player_name, stat_value, matchup)
                 VALUES (?, ?, ?, ?, ?, ?)
                 ON CONFLICT(week, position, rank) DO UPDATE SET
                    player_name = excluded.player_name,
                    stat_value = excluded.stat_value,
                    matchup = excluded.matchup",
            )?;
            for l in leaders {
                stmt.execute(params![
                    l.week.as_u16(),
                    l.position.to_string(),
                    l.rank,
                    l.player_name,
                    l.stat_value,
                    l.matchup,
                ])?;
            }
        }
        tx.commit()?;
        Ok(leaders.len())
    }

    fn upsert_matchup_rankings(&mut self, rankings: &[MatchupRanking]) -> Result<usize> {
        let now = unix_now();
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO defensive_matchup_rankings
                    (position, team, avg_stat, yards_above_avg, rank, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?)
                 ON CONFLICT(position, team) DO UPDATE SET
                    avg_stat = excluded.avg_stat,
                    yards_above_avg = excluded.yards_above_avg,
                    rank = excluded.rank,
                    updated_at = excluded.updated_at",
            )?;
            for r in rankings {
                stmt.execute(params![
                    r.position.to_string(),
                    r.team,
                    r.avg_stat,
                    r.yards_above_avg,
                    r.rank,
                    now,
                ])?;
            }
        }
        tx.commit()?;
        Ok(rankings.len())
    }
}
