//! End-to-end tests: import a snapshot into an on-disk database and run the
//! generators through the public command API.

use std::path::{Path, PathBuf};

use nfl_insights::{
    commands::{
        common::CommandContext, hot_cold::handle_hot_cold, import::handle_import,
        run_all::handle_run_all,
    },
    storage::{lock_path_for, InsightsDatabase},
    InsightsError, Week,
};
use tempfile::TempDir;

/// A hot quarterback (145 x3 then 280/310/295) and a cold running back
/// (100 x3 then 40/50/60), with week 7 opponents and defensive averages.
const SNAPSHOT: &str = r#"{
    "games": [
        {"player_name": "Test QB", "position": "QB", "team": "KC", "week": 1, "passing_yards": 145.0},
        {"player_name": "Test QB", "position": "QB", "team": "KC", "week": 2, "passing_yards": 145.0},
        {"player_name": "Test QB", "position": "QB", "team": "KC", "week": 3, "passing_yards": 145.0},
        {"player_name": "Test QB", "position": "QB", "team": "KC", "week": 4, "passing_yards": 280.0},
        {"player_name": "Test QB", "position": "QB", "team": "KC", "week": 5, "passing_yards": 310.0},
        {"player_name": "Test QB", "position": "QB", "team": "KC", "week": 6, "passing_yards": 295.0},
        {"player_name": "Slow Back", "position": "RB", "team": "NYG", "week": 1, "rushing_yards": 100.0},
        {"player_name": "Slow Back", "position": "RB", "team": "NYG", "week": 2, "rushing_yards": 100.0},
        {"player_name": "Slow Back", "position": "RB", "team": "NYG", "week": 3, "rushing_yards": 100.0},
        {"player_name": "Slow Back", "position": "RB", "team": "NYG", "week": 4, "rushing_yards": 40.0},
        {"player_name": "Slow Back", "position": "RB", "team": "NYG", "week": 5, "rushing_yards": 50.0},
        {"player_name": "Slow Back", "position": "RB", "team": "NYG", "week": 6, "rushing_yards": 60.0},
        {"player_name": "No Team", "position": "WR", "week": 6, "receiving_yards": 90.0}
    ],
    "schedule": [
        {"week": 6, "team": "KC", "opponent": "DEN"},
        {"week": 6, "team": "NYG", "opponent": "PHI"},
        {"week": 7, "team": "KC", "opponent": "LV"},
        {"week": 7, "team": "NYG", "opponent": "DAL"}
    ],
    "defense": [
        {"team": "LV", "position": "QB", "stat": "passing_yards", "value": 215.0},
        {"team": "NYJ", "position": "QB", "stat": "passing_yards", "value": 260.0},
        {"team": "DAL", "position": "RB", "stat": "rushing_yards", "value": 130.0}
    ],
    "league": [
        {"position": "QB", "stat": "passing_yards", "value": 240.0},
        {"position": "RB", "stat": "rushing_yards", "value": 110.0}
    ]
}"#;

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("insights.db");
    let snapshot_path = dir.path().join("snapshot.json");
    std::fs::write(&snapshot_path, SNAPSHOT).unwrap();

    let config_path = write_config(dir.path(), "");
    let mut ctx = CommandContext::new(&db_path, Some(config_path.as_path())).unwrap();
    let summary = handle_import(&mut ctx, &snapshot_path).unwrap();
    assert_eq!(summary.games, 12);
    assert_eq!(summary.malformed, 1);

    (dir, db_path)
}

fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

fn context(dir: &TempDir, db_path: &Path) -> CommandContext {
    let config_path = dir.path().join("config.toml");
    CommandContext::new(db_path, Some(config_path.as_path())).unwrap()
}

#[test]
fn test_end_to_end_hot_quarterback() {
    let (dir, db_path) = setup();
    let mut ctx = context(&dir, &db_path);

    handle_hot_cold(&mut ctx, Week::new(6), false).unwrap();
    let rows = ctx.db.get_hot_cold().unwrap();
    assert_eq!(rows.len(), 2);

    let qb = rows.iter().find(|r| r.player_name == "Test QB").unwrap();
    assert_eq!(qb.stat, "Passing Yds");
    assert_eq!(qb.trend, "hot");
    assert_eq!(qb.recent_average, 295.0);
    assert_eq!(qb.season_average, 220.0);
    assert!((qb.percentage_change - 34.1).abs() < 0.01);

    let rb = rows.iter().find(|r| r.player_name == "Slow Back").unwrap();
    assert_eq!(rb.stat, "Rushing Yds");
    assert_eq!(rb.trend, "cold");
}

#[test]
fn test_run_all_populates_every_table() {
    let (dir, db_path) = setup();
    let mut ctx = context(&dir, &db_path);

    let report = handle_run_all(&mut ctx, Week::new(6), None, false).unwrap();
    assert_eq!(report.succeeded.len(), 5);
    assert!(!lock_path_for(&db_path).exists());

    let watch = ctx.db.get_players_to_watch().unwrap();
    assert_eq!(watch.len(), 2);
    let qb = watch.iter().find(|w| w.player_name == "Test QB").unwrap();
    assert_eq!(qb.performance_type, "Overperforming");
    assert_eq!(qb.matchup_type, "Great Matchup");
    assert_eq!(qb.opponent, "LV");
    let rb = watch.iter().find(|w| w.player_name == "Slow Back").unwrap();
    assert_eq!(rb.performance_type, "Underperforming");
    assert_eq!(rb.matchup_type, "Bad Matchup");

    let projections = ctx.db.get_projections().unwrap();
    assert_eq!(projections.len(), 2);
    let rb = projections.iter().find(|p| p.player_name == "Slow Back").unwrap();
    assert_eq!(rb.stat_key, "rushing_yards");
    assert_eq!(rb.projection, 79.1);
    assert_eq!(rb.opponent, "DAL");

    let leaders = ctx.db.get_weekly_leaders(Week::new(6)).unwrap();
    assert_eq!(leaders.len(), 2);
    assert!(leaders.iter().any(|l| l.matchup == "NYG vs PHI"));

    assert_eq!(ctx.db.get_matchup_rankings().unwrap().len(), 3);
}

#[test]
fn test_repeated_runs_are_idempotent() {
    let (dir, db_path) = setup();
    let mut ctx = context(&dir, &db_path);

    handle_run_all(&mut ctx, Week::new(6), None, false).unwrap();
    let first = (
        ctx.db.get_hot_cold().unwrap(),
        ctx.db.get_players_to_watch().unwrap(),
        ctx.db.get_projections().unwrap(),
        ctx.db.get_weekly_leaders(Week::new(6)).unwrap(),
        ctx.db.get_matchup_rankings().unwrap(),
    );

    handle_run_all(&mut ctx, Week::new(6), None, false).unwrap();
    let second = (
        ctx.db.get_hot_cold().unwrap(),
        ctx.db.get_players_to_watch().unwrap(),
        ctx.db.get_projections().unwrap(),
        ctx.db.get_weekly_leaders(Week::new(6)).unwrap(),
        ctx.db.get_matchup_rankings().unwrap(),
    );

    assert_eq!(first, second);
}

#[test]
fn test_concurrent_run_is_rejected() {
    let (dir, db_path) = setup();
    let mut ctx = context(&dir, &db_path);

    let lock_path = lock_path_for(&db_path);
    std::fs::write(&lock_path, "12345\n").unwrap();

    match handle_hot_cold(&mut ctx, Week::new(6), false) {
        Err(InsightsError::RunInProgress { path }) => assert_eq!(path, lock_path),
        other => panic!("Expected RunInProgress, got {:?}", other.map(|s| s.accepted)),
    }
    assert!(handle_run_all(&mut ctx, Week::new(6), None, false).is_err());
    assert!(ctx.db.get_hot_cold().unwrap().is_empty());

    // The foreign lock is left alone
    assert!(lock_path.exists());
    std::fs::remove_file(&lock_path).unwrap();
    assert!(handle_hot_cold(&mut ctx, Week::new(6), false).is_ok());
}

#[test]
fn test_config_file_overrides_thresholds() {
    let (dir, db_path) = setup();
    write_config(dir.path(), "[hot_cold]\nmin_percent_change = 40.0\n");
    let mut ctx = context(&dir, &db_path);

    let summary = handle_hot_cold(&mut ctx, Week::new(6), false).unwrap();
    assert_eq!(summary.accepted, 0);
    assert!(ctx.db.get_hot_cold().unwrap().is_empty());
}

#[test]
fn test_reopened_database_keeps_results() {
    let (dir, db_path) = setup();
    {
        let mut ctx = context(&dir, &db_path);
        handle_hot_cold(&mut ctx, Week::new(6), false).unwrap();
    }

    let db = InsightsDatabase::open(&db_path).unwrap();
    assert_eq!(db.get_hot_cold().unwrap().len(), 2);
}
