//! Run every generator in dependency order.
//!
//! Phases:
//! 1. `classification`: hot/cold, players to watch
//! 2. `projections`: projections, defensive matchup rankings
//! 3. `leaders` (optional): weekly leaders
//!
//! A failing step in a required phase stops the run. A failing optional
//! step is logged and the run continues.

use std::fmt;
use std::str::FromStr;

use crate::{error::InsightsError, Result, Week};

use super::{
    common::CommandContext, hot_cold::handle_hot_cold,
    matchup_rankings::handle_matchup_rankings, players_to_watch::handle_players_to_watch,
    projections::handle_projections, weekly_leaders::handle_weekly_leaders,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Classification,
    Projections,
    Leaders,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Classification, Phase::Projections, Phase::Leaders];

    pub fn is_optional(&self) -> bool {
        matches!(self, Phase::Leaders)
    }

    pub fn steps(&self) -> &'static [Step] {
        match self {
            Phase::Classification => &[Step::HotCold, Step::PlayersToWatch],
            Phase::Projections => &[Step::Projections, Step::MatchupRankings],
            Phase::Leaders => &[Step::WeeklyLeaders],
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Classification => "classification",
            Phase::Projections => "projections",
            Phase::Leaders => "leaders",
        };
        f.pad(s)
    }
}

impl FromStr for Phase {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "classification" | "classify" => Ok(Phase::Classification),
            "projections" | "projection" => Ok(Phase::Projections),
            "leaders" => Ok(Phase::Leaders),
            _ => Err(InsightsError::InvalidPhase {
                phase: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    HotCold,
    PlayersToWatch,
    Projections,
    MatchupRankings,
    WeeklyLeaders,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::HotCold => "hot-cold",
            Step::PlayersToWatch => "players-to-watch",
            Step::Projections => "projections",
            Step::MatchupRankings => "matchup-rankings",
            Step::WeeklyLeaders => "weekly-leaders",
        }
    }

    fn run(&self, ctx: &mut CommandContext, week: Week) -> Result<()> {
        match self {
            Step::HotCold => handle_hot_cold(ctx, week, false)?,
            Step::PlayersToWatch => handle_players_to_watch(ctx, week, false)?,
            Step::Projections => handle_projections(ctx, week, false)?,
            Step::MatchupRankings => handle_matchup_rankings(ctx, false)?,
            Step::WeeklyLeaders => handle_weekly_leaders(ctx, week, None, false)?,
        };
        Ok(())
    }
}

/// Which steps ran and how they ended.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunAllReport {
    pub succeeded: Vec<&'static str>,
    pub failed: Vec<(&'static str, String)>,
}

impl fmt::Display for RunAllReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Successful: {} steps", self.succeeded.len())?;
        write!(f, "Failed: {} steps", self.failed.len())?;
        for (step, error) in &self.failed {
            write!(f, "\n  {}: {}", step, error)?;
        }
        Ok(())
    }
}

/// Phases selected by `only` and `skip_optional`, in run order.
pub fn select_phases(only: Option<Phase>, skip_optional: bool) -> Vec<Phase> {
    match only {
        Some(phase) => vec![phase],
        None => Phase::ALL
            .into_iter()
            .filter(|p| !(skip_optional && p.is_optional()))
            .collect(),
    }
}

fn run_phases(ctx: &mut CommandContext, week: Week, phases: &[Phase]) -> Result<RunAllReport> {
    let mut report = RunAllReport::default();

    for phase in phases {
        tracing::info!(%phase, "starting phase");
        println!("=== Phase: {} ===", phase);

        for step in phase.steps() {
            match step.run(ctx, week) {
                Ok(()) => report.succeeded.push(step.name()),
                Err(e) if phase.is_optional() => {
                    tracing::warn!(step = step.name(), error = %e, "optional step failed, continuing");
                    report.failed.push((step.name(), e.to_string()));
                }
                Err(e) => {
                    tracing::error!(step = step.name(), error = %e, "required step failed");
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}

/// Run the selected phases for `week` while holding the run lock once for
/// the whole sequence.
pub fn handle_run_all(
    ctx: &mut CommandContext,
    week: Week,
    only: Option<Phase>,
    skip_optional: bool,
) -> Result<RunAllReport> {
    let phases = select_phases(only, skip_optional);
    tracing::info!(?phases, week = %week, "running phases");

    ctx.hold_lock()?;
    let outcome = run_phases(ctx, week, &phases);
    ctx.release_lock();

    let report = outcome?;
    println!("{}", report);
    Ok(report)
}
