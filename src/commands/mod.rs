//! Command implementations for the cricket fantasy CLI

pub mod add_team;
pub mod common;
pub mod list_teams;
pub mod process_result;
pub mod team_result;

#[cfg(test)]
mod tests;

use crate::{FantasyError, MatchName, Result, MATCH_NAME_ENV_VAR};

/// Use the given match name, falling back to `CRICKET_FANTASY_MATCH`.
pub fn resolve_match_name(match_name: Option<MatchName>) -> Result<MatchName> {
    match_name
        .or_else(|| {
            std::env::var(MATCH_NAME_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<MatchName>().ok())
        })
        .ok_or_else(|| FantasyError::MissingMatchName {
            env_var: MATCH_NAME_ENV_VAR.to_string(),
        })
}
