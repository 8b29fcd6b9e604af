//! Team submission command

use std::path::PathBuf;

use tracing::info;

use crate::{
    cricket::{load_roster, DataSource, Roster},
    fantasy::{validate_team, Team},
    storage::FantasyDatabase,
    Result, TeamId,
};

use super::common::open_database;

/// Parameters for submitting a fantasy team.
#[derive(Debug)]
pub struct AddTeamParams {
    pub team_name: String,
    pub players: Vec<String>,
    pub captain: String,
    pub vice_captain: String,
    pub roster: DataSource,
    pub refresh: bool,
    pub db_path: Option<PathBuf>,
}

impl AddTeamParams {
    pub fn team(&self) -> Team {
        Team::new(
            self.team_name.clone(),
            self.players.clone(),
            self.captain.clone(),
            self.vice_captain.clone(),
        )
    }
}

/// Validate a team against the roster and store it. Nothing is written when
/// validation fails.
pub fn submit_team(db: &mut FantasyDatabase, roster: &Roster, team: &Team) -> Result<TeamId> {
    validate_team(team, roster)?;
    db.insert_team(team)
}

/// Handle the add-team command
pub async fn handle_add_team(params: AddTeamParams) -> Result<()> {
    let team = params.team();

    let players = load_roster(&params.roster, params.refresh).await?;
    let roster = Roster::new(&players);
    validate_team(&team, &roster)?;

    let mut db = open_database(params.db_path.as_ref())?;
    let team_id = submit_team(&mut db, &roster, &team)?;

    info!(team = %team.team_name, id = %team_id, "team submitted");
    println!("Success"); // tarpaulin::skip
    Ok(())
}
