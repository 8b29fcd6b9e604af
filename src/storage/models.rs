//! Data models for the storage layer

use crate::cli::types::{MatchName, TeamId};
use crate::cricket::types::MatchStats;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fantasy team as stored, with its scores once a result was processed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: TeamId,
    pub team_name: String,
    pub players: Vec<String>,
    pub captain: String,
    pub vice_captain: String,
    pub player_points: Option<Vec<PlayerPoints>>,
    pub total_points: Option<Decimal>,
    pub created_at: u64,
    pub updated_at: u64,
}

/// Points one team member earned for their fantasy team, multiplier applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPoints {
    pub player_name: String,
    pub points: Decimal,
}

/// Team totals computed for one match, written back onto the team record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredTeam {
    pub id: TeamId,
    pub team_name: String,
    pub captain: String,
    pub vice_captain: String,
    pub player_points: Vec<PlayerPoints>,
    pub total_points: Decimal,
}

/// Final player table for a processed match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_name: MatchName,
    pub stats: MatchStats,
    pub created_at: u64,
}

impl MatchResult {
    pub fn new(match_name: MatchName, stats: MatchStats) -> Self {
        Self {
            match_name,
            stats,
            created_at: 0,
        }
    }
}
