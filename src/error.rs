//! Error types for the NFL insights pipeline

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InsightsError>;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid stat category: {stat}")]
    InvalidStat { stat: String },

    #[error("Invalid week {week}: must be between 1 and {max}")]
    InvalidWeek { week: u16, max: u16 },

    #[error("Invalid phase: {phase}")]
    InvalidPhase { phase: String },

    #[error("Unknown table: {table}")]
    UnknownTable { table: String },

    #[error("Malformed row: {reason}")]
    MalformedRow { reason: String },

    #[error("Another run holds the lock at {}", path.display())]
    RunInProgress { path: PathBuf },

    #[error("Database path not provided and no cache directory is available")]
    MissingDatabasePath,
}

#[cfg(test)]
mod tests;
