//! Unit tests for error handling

use super::*;
use std::io;

#[test]
fn test_database_error_conversion() {
    let err = InsightsError::from(rusqlite::Error::QueryReturnedNoRows);
    match err {
        InsightsError::Database(_) => (),
        _ => panic!("Expected Database error variant"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let err = InsightsError::from(json_error);

    match err {
        InsightsError::Json(_) => (),
        _ => panic!("Expected Json error variant"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let err = InsightsError::from(io_error);

    match err {
        InsightsError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}

#[test]
fn test_config_error_conversion() {
    let toml_error = toml::from_str::<toml::Value>("not = = valid").unwrap_err();
    let err = InsightsError::from(toml_error);

    match err {
        InsightsError::Config(_) => (),
        _ => panic!("Expected Config error variant"),
    }
}

#[test]
fn test_parse_int_error_conversion() {
    let parse_error = "abc".parse::<u16>().unwrap_err();
    let err = InsightsError::from(parse_error);
    assert!(err.to_string().starts_with("Failed to parse number"));
}

#[test]
fn test_error_display_messages() {
    let err = InsightsError::InvalidPosition {
        position: "LS".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid position: LS");

    let err = InsightsError::InvalidWeek { week: 19, max: 18 };
    assert_eq!(err.to_string(), "Invalid week 19: must be between 1 and 18");

    let err = InsightsError::RunInProgress {
        path: PathBuf::from("/tmp/insights.db.lock"),
    };
    assert_eq!(
        err.to_string(),
        "Another run holds the lock at /tmp/insights.db.lock"
    );
}
