//! Hot/cold players: best-change classification over the recent window.

use crate::{
    analysis::{build_windows, ClassificationPolicy, ClassificationResult, RunSummary, Verdict},
    config::InsightsConfig,
    storage::{ResultSink, StatSource},
    Result, Week,
};

use super::common::{load_games, print_json, CommandContext};

/// Classify every player with a game in the recent window ending at `week`.
pub fn generate_hot_cold(
    source: &impl StatSource,
    week: Week,
    config: &InsightsConfig,
) -> Result<(Vec<ClassificationResult>, RunSummary)> {
    let mut summary = RunSummary::new("hot-cold");
    let games = load_games(source, week, &mut summary)?;
    let windows = build_windows(&games, week.window_start(config.window.recent_weeks), week);
    let policy = ClassificationPolicy::BestChange(config.hot_cold.clone());

    let mut results = Vec::new();
    for (player, window) in &windows {
        match policy.classify(player, &window.recent, &window.season, window.games_played) {
            Verdict::Notable(result) => {
                summary.record_accepted();
                results.push(result);
            }
            Verdict::Filtered(reason) => summary.record_filtered(reason),
        }
    }

    Ok((results, summary))
}

/// Generate and store the hot/cold table for `week`.
pub fn handle_hot_cold(ctx: &mut CommandContext, week: Week, as_json: bool) -> Result<RunSummary> {
    let _lock = ctx.lock()?;
    let (results, summary) = generate_hot_cold(&ctx.db, week, &ctx.config)?;
    ctx.db.replace_hot_cold(&results)?;
    tracing::info!(week = %week, rows = results.len(), "hot/cold table replaced");

    if as_json {
        print_json(&results)?;
    } else {
        println!("Hot/cold players through week {}", week);
        for r in &results {
            // tarpaulin::skip - console output
            println!(
                "{:<28} {:<3} {:<14} {:>8.1} vs {:>8.1} ({:+.1}%) {}",
                r.player.name,
                r.player.position,
                r.primary.label(),
                r.recent_average,
                r.season_average,
                r.percent_change,
                r.trend
            );
        }
        println!("{}", summary);
    }

    Ok(summary)
}
