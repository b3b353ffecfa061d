//! Opponent-adjusted projections for the week after `week`.

use crate::{
    analysis::{build_windows, projection::project_player, FilterReason, Projection, RunSummary},
    config::InsightsConfig,
    storage::{ResultSink, StatSource},
    Result, Week,
};

use super::common::{load_games, load_reference, print_json, CommandContext};

/// Project every player with games through `week` against next week's opponent.
///
/// A player counts as accepted when at least one stat could be projected;
/// otherwise the first skip reason is recorded.
pub fn generate_projections(
    source: &impl StatSource,
    week: Week,
    config: &InsightsConfig,
) -> Result<(Vec<Projection>, RunSummary)> {
    let mut summary = RunSummary::new("projections");
    let games = load_games(source, week, &mut summary)?;
    let reference = load_reference(source, week.next(), &mut summary)?;
    let windows = build_windows(&games, Week::new(1), week);

    let mut projections = Vec::new();
    for (player, window) in &windows {
        if player.position.projection_stats().is_empty() {
            summary.record_filtered(FilterReason::UnsupportedPosition);
            continue;
        }
        let Some(opponent) = reference.schedule.opponent(&window.team) else {
            summary.record_filtered(FilterReason::NoOpponent);
            continue;
        };

        let mut first_skip = None;
        let before = projections.len();
        for outcome in project_player(
            player,
            opponent,
            &window.season,
            &reference,
            &config.projection,
        ) {
            match outcome {
                Ok(projection) => projections.push(projection),
                Err((stat, reason)) => {
                    tracing::debug!(player = %player, %stat, %reason, "stat not projected");
                    first_skip.get_or_insert(reason);
                }
            }
        }

        if projections.len() > before {
            summary.record_accepted();
        } else {
            summary.record_filtered(first_skip.unwrap_or(FilterReason::MissingPlayerAverage));
        }
    }

    Ok((projections, summary))
}

/// Generate and store projections for the week after `week`.
pub fn handle_projections(ctx: &mut CommandContext, week: Week, as_json: bool) -> Result<RunSummary> {
    let _lock = ctx.lock()?;
    let (projections, summary) = generate_projections(&ctx.db, week, &ctx.config)?;
    ctx.db.replace_projections(&projections)?;
    tracing::info!(week = %week, rows = projections.len(), "projection table replaced");

    if as_json {
        print_json(&projections)?;
    } else {
        println!("Projections for week {}", week.next());
        for p in &projections {
            // tarpaulin::skip - console output
            println!(
                "{:<28} {:<3} vs {:<4} {:<18} {:>7.1}",
                p.player.name,
                p.player.position,
                p.opponent,
                p.stat.key(),
                p.projection
            );
        }
        println!("{}", summary);
    }

    Ok(summary)
}
