//! Opponent-adjusted per-stat projections.

use super::player::{PlayerKey, StatAverages};
use super::reference::{defense_group, ReferenceData};
use super::summary::FilterReason;
use crate::cli::types::StatCategory;
use crate::config::ProjectionWeights;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub player: PlayerKey,
    pub normalized_name: String,
    pub opponent: String,
    pub stat: StatCategory,
    pub projection: f64,
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Blend a player's average with the same average scaled by how much the
/// opponent allows relative to the league.
///
/// With a zero league average the defense adjustment is skipped.
pub fn project_stat(
    player_average: f64,
    defense_average: f64,
    league_average: f64,
    weights: &ProjectionWeights,
) -> f64 {
    if league_average == 0.0 {
        return round1(player_average);
    }
    let defense_factor = player_average * (defense_average / league_average);
    round1(player_average * weights.player_weight + defense_factor * weights.defense_weight)
}

/// Projections for every stat relevant to the player's position.
///
/// Each stat that cannot be projected is reported with its reason; the
/// rest are still returned.
pub fn project_player(
    player: &PlayerKey,
    opponent: &str,
    season: &StatAverages,
    reference: &ReferenceData,
    weights: &ProjectionWeights,
) -> Vec<Result<Projection, (StatCategory, FilterReason)>> {
    player
        .position
        .projection_stats()
        .iter()
        .map(|&stat| {
            let player_average = season
                .try_get(stat)
                .filter(|v| *v > 0.0)
                .ok_or((stat, FilterReason::MissingPlayerAverage))?;

            let group = defense_group(player.position, stat);
            let defense = reference
                .defense
                .get(opponent, group, stat)
                .ok_or((stat, FilterReason::MissingDefenseAverage))?;
            let league = reference
                .league
                .get(group, stat)
                .ok_or((stat, FilterReason::MissingLeagueAverage))?;

            Ok(Projection {
                player: player.clone(),
                normalized_name: player.normalized_name(),
                opponent: opponent.to_string(),
                stat,
                projection: project_stat(player_average, defense, league, weights),
            })
        })
        .collect()
}
