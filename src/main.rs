//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nfl_insights::{
    cli::{Cli, Commands},
    commands::{
        common::CommandContext, hot_cold::handle_hot_cold, import::handle_import,
        matchup_rankings::handle_matchup_rankings, players_to_watch::handle_players_to_watch,
        projections::handle_projections, resolve_db_path, run_all::handle_run_all,
        weekly_leaders::handle_weekly_leaders,
    },
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose {
        "nfl_insights=debug"
    } else {
        "nfl_insights=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = Cli::parse();
    init_logging(app.verbose);

    let db_path = resolve_db_path(app.db).context("Failed to resolve database path")?;
    let mut ctx = CommandContext::new(&db_path, app.config.as_deref())
        .with_context(|| format!("Failed to open {}", db_path.display()))?;

    match app.command {
        Commands::Import { file } => {
            handle_import(&mut ctx, &file)
                .with_context(|| format!("Failed to import {}", file.display()))?;
        }
        Commands::HotCold { args } => {
            handle_hot_cold(&mut ctx, args.week, args.json)?;
        }
        Commands::PlayersToWatch { args } => {
            handle_players_to_watch(&mut ctx, args.week, args.json)?;
        }
        Commands::Projections { args } => {
            handle_projections(&mut ctx, args.week, args.json)?;
        }
        Commands::WeeklyLeaders { args, limit } => {
            handle_weekly_leaders(&mut ctx, args.week, limit, args.json)?;
        }
        Commands::MatchupRankings { json } => {
            handle_matchup_rankings(&mut ctx, json)?;
        }
        Commands::RunAll {
            week,
            phase,
            skip_optional,
        } => {
            handle_run_all(&mut ctx, week, phase, skip_optional)
                .with_context(|| format!("run-all for week {} failed", week))?;
        }
    }

    Ok(())
}
