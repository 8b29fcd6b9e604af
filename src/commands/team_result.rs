//! Team results command: aggregate, persist team scores, rank.

use std::path::PathBuf;

use tracing::info;

use crate::{
    fantasy::{aggregate_teams, rank, Leaderboard},
    storage::FantasyDatabase,
    FantasyError, MatchName, Result,
};

use super::{
    common::{open_database, print_json},
    resolve_match_name,
};

/// Parameters for the team results command.
#[derive(Debug)]
pub struct TeamResultParams {
    pub match_name: Option<MatchName>,
    pub as_json: bool,
    pub db_path: Option<PathBuf>,
}

/// Score every stored team against a processed match, write the scores back
/// and rank the teams. Ranking only happens once every team update committed.
pub fn team_results(db: &mut FantasyDatabase, match_name: &MatchName) -> Result<Leaderboard> {
    let result = db
        .find_match_result(match_name)?
        .ok_or_else(|| FantasyError::MatchResultNotFound {
            match_name: match_name.to_string(),
        })?;
    let teams = db.list_teams()?;

    let scored = aggregate_teams(&result.stats, &teams);
    db.update_team_scores(&scored)?;

    rank(match_name, scored)
}

/// Handle the team results command
pub async fn handle_team_result(params: TeamResultParams) -> Result<()> {
    let match_name = resolve_match_name(params.match_name)?;
    let mut db = open_database(params.db_path.as_ref())?;

    let board = team_results(&mut db, &match_name)?;
    info!(
        match_name = %match_name,
        teams = board.sorted_teams.len(),
        winners = board.winners.len(),
        "ranked teams"
    );

    if params.as_json {
        return print_json(&board);
    }

    // tarpaulin::skip - console output
    let winners: Vec<&str> = board.winners.iter().map(|t| t.team_name.as_str()).collect();
    println!("Match: {}", board.match_name);
    println!("Winner(s): {}", winners.join(", "));
    for (position, standing) in board.sorted_teams.iter().enumerate() {
        println!(
            "{:>3}. {} {} pts",
            position + 1,
            standing.team_name,
            standing.total_points
        );
    }

    Ok(())
}
