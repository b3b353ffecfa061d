//! Top performers per position for one week.

use crate::{
    analysis::{leaders::weekly_leaders, RunSummary, WeeklyLeader},
    storage::{ResultSink, StatSource},
    Result, Week,
};

use super::common::{load_games, load_schedule, print_json, CommandContext};

pub fn generate_weekly_leaders(
    source: &impl StatSource,
    week: Week,
    limit: usize,
) -> Result<(Vec<WeeklyLeader>, RunSummary)> {
    let mut summary = RunSummary::new("weekly-leaders");
    let games = load_games(source, week, &mut summary)?;
    let schedule = load_schedule(source, week, &mut summary)?;

    let leaders = weekly_leaders(&games, week, &schedule, limit);
    summary.record_accepted_count(leaders.len());

    Ok((leaders, summary))
}

/// Generate and upsert weekly leaders. `limit` falls back to the configured
/// leaders per position.
pub fn handle_weekly_leaders(
    ctx: &mut CommandContext,
    week: Week,
    limit: Option<usize>,
    as_json: bool,
) -> Result<RunSummary> {
    let limit = limit.unwrap_or(ctx.config.window.leaders_per_position);
    let _lock = ctx.lock()?;
    let (leaders, summary) = generate_weekly_leaders(&ctx.db, week, limit)?;
    ctx.db.upsert_weekly_leaders(week, &leaders)?;
    tracing::info!(week = %week, rows = leaders.len(), "weekly leaders upserted");

    if as_json {
        print_json(&leaders)?;
    } else {
        println!("Week {} leaders", week);
        for l in &leaders {
            // tarpaulin::skip - console output
            println!(
                "{:<3} #{} {:<28} {:>7.1}  {}",
                l.position, l.rank, l.player_name, l.stat_value, l.matchup
            );
        }
        println!("{}", summary);
    }

    Ok(summary)
}
