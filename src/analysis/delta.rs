//! Recent-versus-season deltas.

use super::player::StatAverages;
use crate::cli::types::StatCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatChange {
    pub recent: f64,
    pub season: f64,
    pub delta: f64,
    pub percent_change: f64,
}

/// Compare two averages for one category.
///
/// A zero season average yields a zero percent change rather than an
/// infinite one.
pub fn stat_change(recent: f64, season: f64) -> StatChange {
    let delta = recent - season;
    let percent_change = if season != 0.0 {
        delta / season * 100.0
    } else {
        0.0
    };
    StatChange {
        recent,
        season,
        delta,
        percent_change,
    }
}

pub fn category_change(
    recent: &StatAverages,
    season: &StatAverages,
    category: StatCategory,
) -> StatChange {
    stat_change(recent.get(category), season.get(category))
}
