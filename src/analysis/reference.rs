//! Schedule and defensive baselines used for matchups and projections.

use super::player::StatAverages;
use crate::cli::types::{Position, StatCategory};
use std::collections::HashMap;

/// Team → opponent for one week.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule(HashMap<String, String>);

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, team: impl Into<String>, opponent: impl Into<String>) {
        self.0.insert(team.into(), opponent.into());
    }

    pub fn opponent(&self, team: &str) -> Option<&str> {
        self.0.get(team).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Schedule {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The defense row describing production by `position`.
///
/// Passing stats, and everything a quarterback does, are read from the QB
/// row. Other stats use the player's own position.
pub fn defense_group(position: Position, category: StatCategory) -> Position {
    if category.is_passing() || position == Position::QB {
        Position::QB
    } else {
        position
    }
}

/// Per-team averages allowed, split by position group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefenseAverages(HashMap<(String, Position), StatAverages>);

impl DefenseAverages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, team: &str, group: Position, category: StatCategory, value: f64) {
        self.0
            .entry((team.to_string(), group))
            .or_default()
            .set(category, value);
    }

    pub fn get(&self, team: &str, group: Position, category: StatCategory) -> Option<f64> {
        self.0
            .get(&(team.to_string(), group))
            .and_then(|averages| averages.try_get(category))
    }

    /// Every team with a recorded value for this group and category.
    pub fn teams_for(&self, group: Position, category: StatCategory) -> Vec<(String, f64)> {
        let mut teams: Vec<(String, f64)> = self
            .0
            .iter()
            .filter(|((_, g), _)| *g == group)
            .filter_map(|((team, _), averages)| {
                averages.try_get(category).map(|v| (team.clone(), v))
            })
            .collect();
        teams.sort_by(|a, b| a.0.cmp(&b.0));
        teams
    }
}

/// League-wide averages allowed, one row per position group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueAverages(HashMap<Position, StatAverages>);

impl LeagueAverages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, group: Position, category: StatCategory, value: f64) {
        self.0.entry(group).or_default().set(category, value);
    }

    pub fn get(&self, group: Position, category: StatCategory) -> Option<f64> {
        self.0.get(&group).and_then(|averages| averages.try_get(category))
    }
}

/// Everything a generator needs besides the players' own games.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    pub schedule: Schedule,
    pub defense: DefenseAverages,
    pub league: LeagueAverages,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defense_group() {
        assert_eq!(defense_group(Position::WR, StatCategory::PassingYards), Position::QB);
        assert_eq!(defense_group(Position::QB, StatCategory::RushingYards), Position::QB);
        assert_eq!(defense_group(Position::RB, StatCategory::RushingYards), Position::RB);
        assert_eq!(defense_group(Position::TE, StatCategory::ReceivingYards), Position::TE);
    }

    #[test]
    fn test_defense_lookup() {
        let mut defense = DefenseAverages::new();
        defense.set("BUF", Position::RB, StatCategory::RushingYards, 95.5);
        defense.set("MIA", Position::RB, StatCategory::RushingYards, 120.0);
        defense.set("MIA", Position::WR, StatCategory::ReceivingYards, 180.0);

        assert_eq!(defense.get("BUF", Position::RB, StatCategory::RushingYards), Some(95.5));
        assert_eq!(defense.get("BUF", Position::RB, StatCategory::ReceivingYards), None);
        assert_eq!(defense.get("NYJ", Position::RB, StatCategory::RushingYards), None);

        let teams = defense.teams_for(Position::RB, StatCategory::RushingYards);
        assert_eq!(
            teams,
            vec![("BUF".to_string(), 95.5), ("MIA".to_string(), 120.0)]
        );
    }

    #[test]
    fn test_schedule_lookup() {
        let schedule: Schedule = vec![("KC".to_string(), "DEN".to_string())]
            .into_iter()
            .collect();
        assert_eq!(schedule.opponent("KC"), Some("DEN"));
        assert_eq!(schedule.opponent("DEN"), None);
        assert_eq!(schedule.len(), 1);
    }
}
