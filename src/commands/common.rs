//! Shared setup and loading used by every command.

use std::path::Path;

use serde::Serialize;

use crate::{
    analysis::{
        DefenseAverages, LeagueAverages, PlayerGameStat, ReferenceData, RunSummary, Schedule,
    },
    config::InsightsConfig,
    storage::{lock_path_for, InsightsDatabase, RunLock, StatSource},
    Result, Week,
};

/// Resources needed by most commands.
pub struct CommandContext {
    pub db: InsightsDatabase,
    pub config: InsightsConfig,
    held_lock: Option<RunLock>,
}

impl CommandContext {
    /// Open the database and load configuration.
    pub fn new(db_path: &Path, config_path: Option<&Path>) -> Result<Self> {
        tracing::debug!(path = %db_path.display(), "opening database");
        let db = InsightsDatabase::open(db_path)?;
        let config = InsightsConfig::load(config_path)?;
        Ok(Self {
            db,
            config,
            held_lock: None,
        })
    }

    /// In-memory database with the given configuration.
    pub fn in_memory(config: InsightsConfig) -> Result<Self> {
        Ok(Self {
            db: InsightsDatabase::new_in_memory()?,
            config,
            held_lock: None,
        })
    }

    /// Take the run lock for this database for the caller's scope.
    ///
    /// Returns `None` when the context already holds the lock (see
    /// [`hold_lock`](Self::hold_lock)) or the database is in memory.
    pub fn lock(&self) -> Result<Option<RunLock>> {
        if self.held_lock.is_some() {
            return Ok(None);
        }
        match self.db.path() {
            Some(path) => Ok(Some(RunLock::acquire(&lock_path_for(path))?)),
            None => Ok(None),
        }
    }

    /// Keep the run lock until [`release_lock`](Self::release_lock), so a
    /// sequence of commands runs as one writer.
    pub fn hold_lock(&mut self) -> Result<()> {
        if self.held_lock.is_none() {
            self.held_lock = self.lock()?;
        }
        Ok(())
    }

    pub fn release_lock(&mut self) {
        self.held_lock = None;
    }
}

/// Game rows through `through`, converted to domain types.
///
/// Rows that fail conversion are logged, counted in `summary` and skipped.
pub fn load_games(
    source: &impl StatSource,
    through: Week,
    summary: &mut RunSummary,
) -> Result<Vec<PlayerGameStat>> {
    let rows = source.game_stats(through)?;
    let mut games = Vec::with_capacity(rows.len());
    let mut malformed = 0;

    for row in &rows {
        let record = match row {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable game row");
                malformed += 1;
                continue;
            }
        };
        match PlayerGameStat::try_from(record) {
            Ok(game) => games.push(game),
            Err(e) => {
                tracing::warn!(
                    player = record.player_name.as_deref().unwrap_or("?"),
                    week = ?record.week,
                    error = %e,
                    "skipping game row"
                );
                malformed += 1;
            }
        }
    }

    summary.record_malformed(malformed);
    Ok(games)
}

/// Team → opponent pairs for `week`.
pub fn load_schedule(
    source: &impl StatSource,
    week: Week,
    summary: &mut RunSummary,
) -> Result<Schedule> {
    let mut schedule = Schedule::new();
    let mut malformed = 0;

    for row in source.schedule(week)? {
        match row.and_then(|record| record.parts()) {
            Ok((_, team, opponent)) => schedule.insert(team, opponent),
            Err(e) => {
                tracing::warn!(error = %e, "skipping schedule row");
                malformed += 1;
            }
        }
    }

    if schedule.is_empty() {
        tracing::warn!(week = %week, "no schedule rows for week");
    }

    summary.record_malformed(malformed);
    Ok(schedule)
}

/// Defense and league averages.
pub fn load_averages(
    source: &impl StatSource,
    summary: &mut RunSummary,
) -> Result<(DefenseAverages, LeagueAverages)> {
    let mut defense = DefenseAverages::new();
    let mut league = LeagueAverages::new();
    let mut malformed = 0;

    for row in source.defense_averages()? {
        match row.and_then(|record| record.parts()) {
            Ok((team, group, stat, value)) => defense.set(&team, group, stat, value),
            Err(e) => {
                tracing::warn!(error = %e, "skipping defense average row");
                malformed += 1;
            }
        }
    }

    for row in source.league_averages()? {
        match row.and_then(|record| record.parts()) {
            Ok((group, stat, value)) => league.set(group, stat, value),
            Err(e) => {
                tracing::warn!(error = %e, "skipping league average row");
                malformed += 1;
            }
        }
    }

    summary.record_malformed(malformed);
    Ok((defense, league))
}

/// Schedule for `schedule_week` plus defense and league averages.
pub fn load_reference(
    source: &impl StatSource,
    schedule_week: Week,
    summary: &mut RunSummary,
) -> Result<ReferenceData> {
    let schedule = load_schedule(source, schedule_week, summary)?;
    let (defense, league) = load_averages(source, summary)?;
    Ok(ReferenceData {
        schedule,
        defense,
        league,
    })
}

/// Print rows as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(rows: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}
