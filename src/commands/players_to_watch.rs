//! Players to watch: position-primary classification gated by next week's matchup.

use crate::{
    analysis::{
        build_windows,
        matchup::{assess_matchup, supports_trend},
        ClassificationPolicy, FilterReason, RunSummary, Verdict, WatchedPlayer,
    },
    config::InsightsConfig,
    storage::{ResultSink, StatSource},
    Result, Week,
};

use super::common::{load_games, load_reference, print_json, CommandContext};

/// Players whose recent form departs from their season average and whose
/// next opponent supports the trend.
///
/// Over-performers need a Good or Great matchup, under-performers a Bad one.
pub fn generate_players_to_watch(
    source: &impl StatSource,
    week: Week,
    config: &InsightsConfig,
) -> Result<(Vec<WatchedPlayer>, RunSummary)> {
    let mut summary = RunSummary::new("players-to-watch");
    let games = load_games(source, week, &mut summary)?;
    let reference = load_reference(source, week.next(), &mut summary)?;
    let windows = build_windows(&games, week.window_start(config.window.recent_weeks), week);
    let policy = ClassificationPolicy::PositionPrimary(config.watch.clone());

    let mut watched = Vec::new();
    for (player, window) in &windows {
        let classification =
            match policy.classify(player, &window.recent, &window.season, window.games_played) {
                Verdict::Notable(result) => result,
                Verdict::Filtered(reason) => {
                    summary.record_filtered(reason);
                    continue;
                }
            };

        let matchup = match assess_matchup(
            &reference,
            &window.team,
            player.position,
            classification.primary.category(),
            &config.matchup,
        ) {
            Ok(matchup) => matchup,
            Err(reason) => {
                tracing::debug!(player = %player, %reason, "dropping watch candidate");
                summary.record_filtered(reason);
                continue;
            }
        };

        if !supports_trend(matchup.tier, classification.trend) {
            summary.record_filtered(FilterReason::MatchupMismatch);
            continue;
        }

        summary.record_accepted();
        watched.push(WatchedPlayer {
            normalized_name: player.normalized_name(),
            classification,
            matchup,
        });
    }

    Ok((watched, summary))
}

/// Generate and store the players-to-watch table for `week`.
pub fn handle_players_to_watch(
    ctx: &mut CommandContext,
    week: Week,
    as_json: bool,
) -> Result<RunSummary> {
    let _lock = ctx.lock()?;
    let (watched, summary) = generate_players_to_watch(&ctx.db, week, &ctx.config)?;
    ctx.db.replace_players_to_watch(&watched)?;
    tracing::info!(week = %week, rows = watched.len(), "players-to-watch table replaced");

    if as_json {
        print_json(&watched)?;
    } else {
        println!("Players to watch for week {}", week.next());
        for w in &watched {
            let c = &w.classification;
            // tarpaulin::skip - console output
            println!(
                "{:<28} {:<3} {:<15} {:>8.1} vs {:>8.1}  vs {:<4} {}",
                c.player.name,
                c.player.position,
                c.trend.label(),
                c.recent_average,
                c.season_average,
                w.matchup.opponent,
                w.matchup.tier.label()
            );
        }
        println!("{}", summary);
    }

    Ok(summary)
}
