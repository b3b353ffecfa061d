//! Threshold configuration for the classifiers, matchup scorer and projections.
//!
//! Every section and scalar has a default so a TOML file only needs to list
//! the values it overrides. Per-stat tables are replaced whole:
//!
//! ```toml
//! [hot_cold]
//! min_percent_change = 10.0
//!
//! [watch.min_difference]
//! passing = 20.0
//! rushing = 8.0
//! receiving = 10.0
//! ```

use crate::cli::types::PrimaryStat;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One threshold per primary stat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryThresholds {
    pub passing: f64,
    pub rushing: f64,
    pub receiving: f64,
}

impl CategoryThresholds {
    pub fn get(&self, stat: PrimaryStat) -> f64 {
        match stat {
            PrimaryStat::Passing => self.passing,
            PrimaryStat::Rushing => self.rushing,
            PrimaryStat::Receiving => self.receiving,
        }
    }
}

/// Filters for best-change (hot/cold) selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotColdThresholds {
    /// Season average must be strictly above this floor.
    pub min_season_average: CategoryThresholds,
    /// Recent average must be strictly above this floor.
    pub min_recent_average: CategoryThresholds,
    /// Games played must be strictly above this.
    pub min_games_played: u32,
    /// Absolute percent change must be at least this.
    pub min_percent_change: f64,
}

impl Default for HotColdThresholds {
    fn default() -> Self {
        Self {
            min_season_average: CategoryThresholds {
                passing: 30.0,
                rushing: 10.0,
                receiving: 5.0,
            },
            min_recent_average: CategoryThresholds {
                passing: 5.0,
                rushing: 2.0,
                receiving: 1.0,
            },
            min_games_played: 1,
            min_percent_change: 20.0,
        }
    }
}

/// Filters for position-aware (players to watch) selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchThresholds {
    /// Absolute recent-vs-season yardage difference must exceed this.
    pub min_difference: CategoryThresholds,
    /// Season average must be at least this.
    pub min_season_average: f64,
    /// Recent average must be strictly above this.
    pub min_recent_average: f64,
    /// Games played must be at least this.
    pub min_games_played: u32,
}

impl Default for WatchThresholds {
    fn default() -> Self {
        Self {
            min_difference: CategoryThresholds {
                passing: 15.0,
                rushing: 8.0,
                receiving: 10.0,
            },
            min_season_average: 15.0,
            min_recent_average: 5.0,
            min_games_played: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchupThresholds {
    /// Scores strictly above this are a great matchup; above zero is good.
    pub great_above: f64,
}

impl Default for MatchupThresholds {
    fn default() -> Self {
        Self { great_above: 20.0 }
    }
}

/// Blend weights for projections. They are expected to sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionWeights {
    pub player_weight: f64,
    pub defense_weight: f64,
}

impl Default for ProjectionWeights {
    fn default() -> Self {
        Self {
            player_weight: 0.7,
            defense_weight: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Number of trailing weeks (current week included) in the recent average.
    pub recent_weeks: u16,
    /// Players per position kept by the weekly leaders table.
    pub leaders_per_position: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            recent_weeks: 3,
            leaders_per_position: 5,
        }
    }
}

/// Complete run configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    pub hot_cold: HotColdThresholds,
    pub watch: WatchThresholds,
    pub matchup: MatchupThresholds,
    pub projection: ProjectionWeights,
    pub window: WindowConfig,
}

impl InsightsConfig {
    /// Parse a TOML document; missing sections keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load from an explicit path, else the user config file if it exists,
    /// else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => {
                    tracing::debug!("no config file found, using default thresholds");
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&contents)
    }

    /// `<config_dir>/nfl-insights/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("nfl-insights").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = InsightsConfig::default();
        assert_eq!(config.hot_cold.min_season_average.get(PrimaryStat::Passing), 30.0);
        assert_eq!(config.hot_cold.min_recent_average.get(PrimaryStat::Receiving), 1.0);
        assert_eq!(config.hot_cold.min_games_played, 1);
        assert_eq!(config.hot_cold.min_percent_change, 20.0);
        assert_eq!(config.watch.min_difference.get(PrimaryStat::Rushing), 8.0);
        assert_eq!(config.watch.min_games_played, 4);
        assert_eq!(config.matchup.great_above, 20.0);
        assert_eq!(config.projection.player_weight, 0.7);
        assert_eq!(config.window.recent_weeks, 3);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = InsightsConfig::from_toml_str(
            r#"
            [hot_cold]
            min_percent_change = 10.0

            [window]
            recent_weeks = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.hot_cold.min_percent_change, 10.0);
        assert_eq!(config.hot_cold.min_games_played, 1);
        assert_eq!(config.window.recent_weeks, 2);
        assert_eq!(config.window.leaders_per_position, 5);
        assert_eq!(config.watch, WatchThresholds::default());
    }

    #[test]
    fn test_nested_category_table() {
        let config = InsightsConfig::from_toml_str(
            r#"
            [watch.min_difference]
            passing = 20.0
            rushing = 10.0
            receiving = 15.0
            "#,
        )
        .unwrap();
        assert_eq!(config.watch.min_difference.get(PrimaryStat::Receiving), 15.0);
        assert_eq!(config.watch.min_season_average, 15.0);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = InsightsConfig::from_toml_str("[hot_cold\nmin = ").unwrap_err();
        assert!(matches!(err, crate::error::InsightsError::Config(_)));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[matchup]\ngreat_above = 25.0").unwrap();

        let config = InsightsConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.matchup.great_above, 25.0);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = InsightsConfig::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(result.is_err());
    }
}
