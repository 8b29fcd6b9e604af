//! Team totals from a match's player points table.

use rust_decimal::Decimal;

use crate::cricket::types::MatchStats;
use crate::storage::{PlayerPoints, ScoredTeam, TeamRecord};

/// Captain points are doubled.
pub fn captain_multiplier() -> Decimal {
    Decimal::new(2, 0)
}

/// Vice-captain points are multiplied by 1.5.
pub fn vice_captain_multiplier() -> Decimal {
    Decimal::new(15, 1)
}

/// Multiplier a team applies to one of its players.
pub fn multiplier_for(team: &TeamRecord, player: &str) -> Decimal {
    if player == team.captain {
        captain_multiplier()
    } else if player == team.vice_captain {
        vice_captain_multiplier()
    } else {
        Decimal::ONE
    }
}

/// Score one team. Players who did not feature in the match earn nothing.
pub fn score_team(stats: &MatchStats, team: &TeamRecord) -> ScoredTeam {
    let player_points: Vec<PlayerPoints> = team
        .players
        .iter()
        .map(|name| {
            let base = stats.get(name).map(|s| s.points).unwrap_or(0);
            PlayerPoints {
                player_name: name.clone(),
                points: Decimal::from(base) * multiplier_for(team, name),
            }
        })
        .collect();
    let total_points = player_points.iter().map(|p| p.points).sum();

    ScoredTeam {
        id: team.id,
        team_name: team.team_name.clone(),
        captain: team.captain.clone(),
        vice_captain: team.vice_captain.clone(),
        player_points,
        total_points,
    }
}

/// Score every team against the same match table, preserving input order.
pub fn aggregate_teams(stats: &MatchStats, teams: &[TeamRecord]) -> Vec<ScoredTeam> {
    teams.iter().map(|team| score_team(stats, team)).collect()
}
