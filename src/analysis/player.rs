//! Player identity and per-game stat lines.

use crate::cli::types::{Position, StatCategory, Week};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Join key across recent, season and games-played sources.
///
/// A player who changes position is a different key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerKey {
    pub name: String,
    pub position: Position,
}

impl PlayerKey {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.position)
    }
}

/// One player's recorded box score for one game.
///
/// Categories with no recorded value are absent from `stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerGameStat {
    pub player: PlayerKey,
    pub team: String,
    pub week: Week,
    pub stats: BTreeMap<StatCategory, f64>,
}

impl PlayerGameStat {
    /// Recorded value for a category, zero when missing.
    pub fn value(&self, category: StatCategory) -> f64 {
        self.stats.get(&category).copied().unwrap_or(0.0)
    }
}

/// Mean value per stat category over some window of games.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatAverages(BTreeMap<StatCategory, f64>);

impl StatAverages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Average for a category; categories never recorded read as zero.
    pub fn get(&self, category: StatCategory) -> f64 {
        self.0.get(&category).copied().unwrap_or(0.0)
    }

    /// Average only when the category was recorded.
    pub fn try_get(&self, category: StatCategory) -> Option<f64> {
        self.0.get(&category).copied()
    }

    pub fn set(&mut self, category: StatCategory, value: f64) {
        self.0.insert(category, value);
    }
}

impl FromIterator<(StatCategory, f64)> for StatAverages {
    fn from_iter<I: IntoIterator<Item = (StatCategory, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Lowercase a display name and strip punctuation so names from different
/// sources join.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '-' | '.' | '\u{2019}' | '\'' | '`'))
        .collect::<String>()
        .trim()
        .to_string()
}
