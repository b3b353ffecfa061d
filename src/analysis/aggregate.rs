//! Rolling and season averages over per-game rows.

use super::player::{PlayerGameStat, PlayerKey, StatAverages};
use crate::cli::types::{StatCategory, Week};
use std::collections::BTreeMap;

/// Mean of every stat category over `games`.
///
/// Missing values contribute zero but still count toward the denominator.
/// An empty slice yields zero for every category.
pub fn average_games(games: &[PlayerGameStat]) -> StatAverages {
    StatCategory::ALL
        .iter()
        .map(|&category| {
            let values: Vec<f64> = games.iter().map(|g| g.value(category)).collect();
            (category, mean(&values))
        })
        .collect()
}

/// Arithmetic mean, zero for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Recent and season aggregates for one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerWindow {
    pub team: String,
    pub recent: StatAverages,
    pub season: StatAverages,
    pub games_played: u32,
}

/// Group a season of game rows by player and compute both windows.
///
/// Only players with at least one game in `recent_from..=through` are
/// returned. The team is taken from the player's latest game.
pub fn build_windows(
    games: &[PlayerGameStat],
    recent_from: Week,
    through: Week,
) -> BTreeMap<PlayerKey, PlayerWindow> {
    let mut by_player: BTreeMap<PlayerKey, Vec<&PlayerGameStat>> = BTreeMap::new();
    for game in games.iter().filter(|g| g.week <= through) {
        by_player.entry(game.player.clone()).or_default().push(game);
    }

    let mut windows = BTreeMap::new();
    for (key, mut rows) in by_player {
        rows.sort_by_key(|g| g.week);

        let recent: Vec<PlayerGameStat> = rows
            .iter()
            .filter(|g| g.week >= recent_from)
            .map(|g| (*g).clone())
            .collect();
        if recent.is_empty() {
            continue;
        }

        let season: Vec<PlayerGameStat> = rows.iter().map(|g| (*g).clone()).collect();
        let team = rows
            .last()
            .map(|g| g.team.clone())
            .unwrap_or_default();

        windows.insert(
            key,
            PlayerWindow {
                team,
                recent: average_games(&recent),
                season: average_games(&season),
                games_played: season.len() as u32,
            },
        );
    }
    windows
}
