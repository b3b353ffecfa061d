//! Weekly leaders and defensive matchup rankings.

use super::player::PlayerGameStat;
use super::reference::{DefenseAverages, LeagueAverages, Schedule};
use crate::cli::types::{Position, Week};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyLeader {
    pub week: Week,
    pub position: Position,
    pub rank: u32,
    pub player_name: String,
    pub stat_value: f64,
    pub matchup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupRanking {
    pub position: Position,
    pub team: String,
    pub avg_stat: f64,
    pub yards_above_avg: f64,
    pub rank: u32,
}

fn by_value_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Top `limit` players per skill position for one week, ranked by the
/// position's primary yardage stat.
pub fn weekly_leaders(
    games: &[PlayerGameStat],
    week: Week,
    schedule: &Schedule,
    limit: usize,
) -> Vec<WeeklyLeader> {
    let mut leaders = Vec::new();

    for position in Position::SKILL {
        let category = position.primary_stat().category();
        let mut rows: Vec<&PlayerGameStat> = games
            .iter()
            .filter(|g| g.week == week && g.player.position == position)
            .collect();
        rows.sort_by(|a, b| {
            by_value_desc(a.value(category), b.value(category))
                .then_with(|| a.player.name.cmp(&b.player.name))
        });

        for (i, game) in rows.into_iter().take(limit).enumerate() {
            let matchup = match schedule.opponent(&game.team) {
                Some(opponent) => format!("{} vs {}", game.team, opponent),
                None => game.team.clone(),
            };
            leaders.push(WeeklyLeader {
                week,
                position,
                rank: i as u32 + 1,
                player_name: game.player.name.clone(),
                stat_value: game.value(category),
                matchup,
            });
        }
    }

    leaders
}

/// Rank defenses per skill position by primary-stat yards allowed above
/// the league average. Rank 1 is the most generous defense.
pub fn matchup_rankings(defense: &DefenseAverages, league: &LeagueAverages) -> Vec<MatchupRanking> {
    let mut rankings = Vec::new();

    for position in Position::SKILL {
        let category = position.primary_stat().category();
        let Some(league_avg) = league.get(position, category) else {
            tracing::warn!(%position, "no league average, skipping matchup rankings");
            continue;
        };

        let mut teams: Vec<(String, f64, f64)> = defense
            .teams_for(position, category)
            .into_iter()
            .map(|(team, avg)| (team, avg, avg - league_avg))
            .collect();
        teams.sort_by(|a, b| by_value_desc(a.2, b.2).then_with(|| a.0.cmp(&b.0)));

        for (i, (team, avg_stat, yards_above_avg)) in teams.into_iter().enumerate() {
            rankings.push(MatchupRanking {
                position,
                team,
                avg_stat,
                yards_above_avg,
                rank: i as u32 + 1,
            });
        }
    }

    rankings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::player::PlayerKey;
    use crate::cli::types::StatCategory;
    use std::collections::BTreeMap;

    fn game(name: &str, position: Position, team: &str, week: u16, yards: f64) -> PlayerGameStat {
        let category = position.primary_stat().category();
        PlayerGameStat {
            player: PlayerKey::new(name, position),
            team: team.to_string(),
            week: Week::new(week),
            stats: BTreeMap::from([(category, yards)]),
        }
    }

    #[test]
    fn test_weekly_leaders_rank_and_limit() {
        let games = vec![
            game("RB One", Position::RB, "DET", 4, 140.0),
            game("RB Two", Position::RB, "SF", 4, 95.0),
            game("RB Three", Position::RB, "ATL", 4, 120.0),
            game("RB Other Week", Position::RB, "NYG", 3, 200.0),
            game("QB One", Position::QB, "KC", 4, 310.0),
        ];
        let mut schedule = Schedule::new();
        schedule.insert("DET", "CHI");

        let leaders = weekly_leaders(&games, Week::new(4), &schedule, 2);
        let rbs: Vec<&WeeklyLeader> = leaders.iter().filter(|l| l.position == Position::RB).collect();

        assert_eq!(rbs.len(), 2);
        assert_eq!(rbs[0].player_name, "RB One");
        assert_eq!(rbs[0].rank, 1);
        assert_eq!(rbs[0].matchup, "DET vs CHI");
        assert_eq!(rbs[1].player_name, "RB Three");
        assert_eq!(rbs[1].matchup, "ATL");

        let qbs: Vec<&WeeklyLeader> = leaders.iter().filter(|l| l.position == Position::QB).collect();
        assert_eq!(qbs.len(), 1);
        assert_eq!(qbs[0].stat_value, 310.0);
        assert!(leaders.iter().all(|l| l.week == Week::new(4)));
    }

    #[test]
    fn test_weekly_leaders_tie_break_by_name() {
        let games = vec![
            game("Zed", Position::WR, "A", 2, 100.0),
            game("Abe", Position::WR, "B", 2, 100.0),
        ];
        let leaders = weekly_leaders(&games, Week::new(2), &Schedule::new(), 5);
        assert_eq!(leaders[0].player_name, "Abe");
        assert_eq!(leaders[1].player_name, "Zed");
    }

    #[test]
    fn test_matchup_rankings() {
        let mut defense = DefenseAverages::new();
        defense.set("MIA", Position::RB, StatCategory::RushingYards, 130.0);
        defense.set("BAL", Position::RB, StatCategory::RushingYards, 80.0);
        defense.set("NYJ", Position::RB, StatCategory::RushingYards, 105.0);
        defense.set("MIA", Position::WR, StatCategory::ReceivingYards, 170.0);

        let mut league = LeagueAverages::new();
        league.set(Position::RB, StatCategory::RushingYards, 100.0);

        let rankings = matchup_rankings(&defense, &league);
        // WR has no league average and is skipped
        assert!(rankings.iter().all(|r| r.position == Position::RB));
        assert_eq!(rankings.len(), 3);
        assert_eq!(rankings[0].team, "MIA");
        assert_eq!(rankings[0].yards_above_avg, 30.0);
        assert_eq!(rankings[0].rank, 1);
        assert_eq!(rankings[2].team, "BAL");
        assert_eq!(rankings[2].yards_above_avg, -20.0);
        assert_eq!(rankings[2].rank, 3);
    }
}
