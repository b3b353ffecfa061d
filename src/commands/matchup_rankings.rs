//! Defensive matchup rankings by yards allowed above league average.

use crate::{
    analysis::{leaders::matchup_rankings, MatchupRanking, RunSummary},
    storage::{ResultSink, StatSource},
    Result,
};

use super::common::{load_averages, print_json, CommandContext};

pub fn generate_matchup_rankings(
    source: &impl StatSource,
) -> Result<(Vec<MatchupRanking>, RunSummary)> {
    let mut summary = RunSummary::new("matchup-rankings");
    let (defense, league) = load_averages(source, &mut summary)?;

    let rankings = matchup_rankings(&defense, &league);
    summary.record_accepted_count(rankings.len());

    Ok((rankings, summary))
}

pub fn handle_matchup_rankings(ctx: &mut CommandContext, as_json: bool) -> Result<RunSummary> {
    let _lock = ctx.lock()?;
    let (rankings, summary) = generate_matchup_rankings(&ctx.db)?;
    ctx.db.upsert_matchup_rankings(&rankings)?;
    tracing::info!(rows = rankings.len(), "matchup rankings upserted");

    if as_json {
        print_json(&rankings)?;
    } else {
        println!("Defensive matchup rankings");
        for r in &rankings {
            // tarpaulin::skip - console output
            println!(
                "{:<3} #{:<2} {:<4} {:>7.1} allowed ({:+.1} vs league)",
                r.position, r.rank, r.team, r.avg_stat, r.yards_above_avg
            );
        }
        println!("{}", summary);
    }

    Ok(summary)
}
