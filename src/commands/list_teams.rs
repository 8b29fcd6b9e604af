//! Stored teams listing

use std::path::PathBuf;

use crate::Result;

use super::common::{open_database, print_json};

/// Handle the list-teams command
pub async fn handle_list_teams(db_path: Option<PathBuf>, as_json: bool) -> Result<()> {
    let db = open_database(db_path.as_ref())?;
    let teams = db.list_teams()?;

    if as_json {
        return print_json(&teams);
    }

    if teams.is_empty() {
        println!("No teams submitted yet"); // tarpaulin::skip
    }
    for team in teams {
        // tarpaulin::skip - console output
        let total = team
            .total_points
            .map(|t| format!("{} pts", t))
            .unwrap_or_else(|| "unscored".to_string());
        println!(
            "{} {} (C: {}, VC: {}) {}",
            team.id, team.team_name, team.captain, team.vice_captain, total
        );
    }

    Ok(())
}
