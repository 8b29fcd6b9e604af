//! Winners and leaderboard for a processed match.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cli::types::MatchName;
use crate::error::{FantasyError, Result};
use crate::storage::ScoredTeam;

/// One leaderboard line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team_name: String,
    pub total_points: Decimal,
}

/// Winners (every team tied on the top score) and the full ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub match_name: MatchName,
    pub winners: Vec<ScoredTeam>,
    pub sorted_teams: Vec<TeamStanding>,
}

impl Leaderboard {
    pub fn top_score(&self) -> Option<Decimal> {
        self.sorted_teams.first().map(|s| s.total_points)
    }
}

/// Rank teams by total points, highest first. Equal totals keep their input
/// order and all teams on the top score win.
pub fn rank(match_name: &MatchName, mut teams: Vec<ScoredTeam>) -> Result<Leaderboard> {
    teams.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    let top = teams.first().ok_or(FantasyError::NoTeams)?.total_points;

    let sorted_teams = teams
        .iter()
        .map(|t| TeamStanding {
            team_name: t.team_name.clone(),
            total_points: t.total_points,
        })
        .collect();
    let winners = teams
        .into_iter()
        .take_while(|t| t.total_points == top)
        .collect();

    Ok(Leaderboard {
        match_name: match_name.clone(),
        winners,
        sorted_teams,
    })
}
