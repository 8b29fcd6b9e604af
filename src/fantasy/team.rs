//! Fantasy team submissions and their validation.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::cli::types::Role;
use crate::cricket::types::Roster;
use crate::error::{FantasyError, Result};

/// Players every fantasy team must field.
pub const TEAM_SIZE: usize = 11;
/// Minimum players of each role.
pub const MIN_PER_ROLE: usize = 1;
/// Maximum players of each role.
pub const MAX_PER_ROLE: usize = 8;

pub const MANDATORY_FIELDS_MESSAGE: &str =
    "Team name, captain name and vice-captain name are mandatory";
pub const TEAM_SIZE_MESSAGE: &str = "11 players are mandatory";
pub const CAPTAINCY_MESSAGE: &str = "Provide valid captain and vice captain";
pub const ROLE_DISTRIBUTION_MESSAGE: &str = "Team must consist of Wicket Keeper, Batter, \
All Rounder, Bowler where minimum value is 1 and maximum is 8 for each player type";

/// A user-submitted fantasy team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_name: String,
    pub players: Vec<String>,
    pub captain: String,
    pub vice_captain: String,
}

impl Team {
    /// Build a submission, trimming surrounding whitespace from every name.
    pub fn new(
        team_name: impl Into<String>,
        players: Vec<String>,
        captain: impl Into<String>,
        vice_captain: impl Into<String>,
    ) -> Self {
        Self {
            team_name: team_name.into().trim().to_string(),
            players: players.into_iter().map(|p| p.trim().to_string()).collect(),
            captain: captain.into().trim().to_string(),
            vice_captain: vice_captain.into().trim().to_string(),
        }
    }
}

/// Count the team's players per role. Players without a known role are not counted.
pub fn role_counts(players: &[String], roster: &Roster) -> BTreeMap<Role, usize> {
    let mut counts: BTreeMap<Role, usize> = Role::ALL.iter().map(|r| (*r, 0)).collect();
    for role in players.iter().filter_map(|p| roster.role_of(p)) {
        *counts.entry(role).or_insert(0) += 1;
    }
    counts
}

/// Check a submission against the roster. The first failing rule is reported.
pub fn validate_team(team: &Team, roster: &Roster) -> Result<()> {
    if team.team_name.is_empty() || team.captain.is_empty() || team.vice_captain.is_empty() {
        return Err(FantasyError::invalid_team(MANDATORY_FIELDS_MESSAGE));
    }

    if team.players.len() != TEAM_SIZE {
        return Err(FantasyError::invalid_team(TEAM_SIZE_MESSAGE));
    }

    let mut seen = BTreeSet::new();
    for player in &team.players {
        if !seen.insert(player.as_str()) {
            return Err(FantasyError::invalid_team(format!(
                "{}: {} is listed more than once",
                TEAM_SIZE_MESSAGE, player
            )));
        }
    }

    if let Some(unknown) = team.players.iter().find(|p| !roster.contains(p)) {
        return Err(FantasyError::invalid_team(format!(
            "{}: {} is not in the player list",
            TEAM_SIZE_MESSAGE, unknown
        )));
    }

    let picked = |name: &str| seen.contains(name) && roster.contains(name);
    if team.captain == team.vice_captain || !picked(&team.captain) || !picked(&team.vice_captain) {
        return Err(FantasyError::invalid_team(CAPTAINCY_MESSAGE));
    }

    let counts = role_counts(&team.players, roster);
    if counts
        .values()
        .any(|count| !(MIN_PER_ROLE..=MAX_PER_ROLE).contains(count))
    {
        return Err(FantasyError::invalid_team(ROLE_DISTRIBUTION_MESSAGE));
    }

    Ok(())
}
