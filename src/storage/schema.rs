//! Database schema and connection management

use crate::error::{InsightsError, Result};
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Connection to the stats database holding both the source tables and
/// the generated insight tables.
pub struct InsightsDatabase {
    pub(crate) conn: Connection,
    path: Option<PathBuf>,
}

impl InsightsDatabase {
    /// Open (creating if needed) the database at `path` and ensure tables exist.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let mut db = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database for tests and dry runs.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn, path: None };
        db.initialize_schema()?;
        Ok(db)
    }

    /// File backing this database, `None` when in memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// `<cache_dir>/nfl-insights/insights.db`
    pub fn default_path() -> Result<PathBuf> {
        let cache_dir = cache_dir().ok_or(InsightsError::MissingDatabasePath)?;
        Ok(cache_dir.join("nfl-insights").join("insights.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS game_stats (
                player_name TEXT NOT NULL,
                position TEXT NOT NULL,
                team TEXT,
                week INTEGER NOT NULL,
                passing_attempts REAL,
                completions REAL,
                passing_yards REAL,
                passing_tds REAL,
                interceptions REAL,
                rushing_attempts REAL,
                rushing_yards REAL,
                rushing_tds REAL,
                receptions REAL,
                receiving_yards REAL,
                receiving_tds REAL,
                PRIMARY KEY (player_name, position, week)
            );

            CREATE INDEX IF NOT EXISTS idx_game_stats_week ON game_stats(week);

            CREATE TABLE IF NOT EXISTS team_schedule (
                week INTEGER NOT NULL,
                team TEXT NOT NULL,
                opponent TEXT NOT NULL,
                PRIMARY KEY (week, team)
            );

            CREATE TABLE IF NOT EXISTS defense_averages (
                team TEXT NOT NULL,
                position TEXT NOT NULL,
                stat TEXT NOT NULL,
                value REAL NOT NULL,
                PRIMARY KEY (team, position, stat)
            );

            CREATE TABLE IF NOT EXISTS league_averages (
                position TEXT NOT NULL,
                stat TEXT NOT NULL,
                value REAL NOT NULL,
                PRIMARY KEY (position, stat)
            );

            CREATE TABLE IF NOT EXISTS hot_cold_players (
                player_name TEXT NOT NULL,
                position TEXT NOT NULL,
                stat TEXT NOT NULL,
                recent_average REAL NOT NULL,
                season_average REAL NOT NULL,
                percentage_change REAL NOT NULL,
                trend TEXT NOT NULL,
                PRIMARY KEY (player_name, position)
            );

            CREATE TABLE IF NOT EXISTS players_to_watch (
                normalized_name TEXT NOT NULL,
                player_name TEXT NOT NULL,
                position TEXT NOT NULL,
                stat_to_display TEXT NOT NULL,
                last_3_avg REAL NOT NULL,
                season_avg REAL NOT NULL,
                opponent TEXT NOT NULL,
                matchup_type TEXT NOT NULL,
                performance_type TEXT NOT NULL,
                PRIMARY KEY (player_name, position)
            );

            CREATE TABLE IF NOT EXISTS player_projections (
                player_name TEXT NOT NULL,
                normalized_name TEXT NOT NULL,
                position TEXT NOT NULL,
                opponent TEXT NOT NULL,
                stat_key TEXT NOT NULL,
                projection REAL NOT NULL,
                PRIMARY KEY (player_name, position, stat_key)
            );

            CREATE TABLE IF NOT EXISTS weekly_leaders (
                week INTEGER NOT NULL,
                position TEXT NOT NULL,
                rank INTEGER NOT NULL,
                player_name TEXT NOT NULL,
                stat_value REAL NOT NULL,
                matchup TEXT NOT NULL,
                PRIMARY KEY (week, position, rank)
            );

            CREATE TABLE IF NOT EXISTS defensive_matchup_rankings (
                position TEXT NOT NULL,
                team TEXT NOT NULL,
                avg_stat REAL NOT NULL,
                yards_above_avg REAL NOT NULL,
                rank INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (position, team)
            );",
        )?;

        Ok(())
    }
}
