//! Match scoring command.
//!
//! Loads the roster and the ball-by-ball deliveries, runs the scoring engine
//! and stores the resulting player table under the match name.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    cricket::{compute_match_stats, load_deliveries, load_roster, DataSource, Delivery, Player, Roster},
    storage::{FantasyDatabase, MatchResult},
    MatchName, Result,
};

use super::{
    common::{open_database, print_json},
    resolve_match_name,
};

/// Parameters for processing a match result.
#[derive(Debug)]
pub struct ProcessResultParams {
    pub match_name: Option<MatchName>,
    pub roster: DataSource,
    pub deliveries: DataSource,
    pub refresh: bool,
    pub force: bool,
    pub as_json: bool,
    pub db_path: Option<PathBuf>,
}

/// What processing a match produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessOutcome {
    pub result: MatchResult,
    /// False when a stored result already existed and was kept.
    pub stored: bool,
}

/// Score a match and persist the player table. A failed computation stores
/// nothing.
pub fn process_match(
    db: &mut FantasyDatabase,
    match_name: &MatchName,
    deliveries: &[Delivery],
    players: &[Player],
    force: bool,
) -> Result<ProcessOutcome> {
    let roster = Roster::new(players);
    let stats = compute_match_stats(deliveries, &roster)?;
    let result = MatchResult::new(match_name.clone(), stats);
    let stored = db.upsert_match_result(&result, force)?;

    if !stored {
        warn!(match_name = %match_name, "result already stored, keeping the existing one");
    }

    Ok(ProcessOutcome { result, stored })
}

/// Handle the process-result command
pub async fn handle_process_result(params: ProcessResultParams) -> Result<()> {
    let match_name = resolve_match_name(params.match_name)?;

    let players = load_roster(&params.roster, params.refresh).await?;
    let deliveries = load_deliveries(&params.deliveries, params.refresh).await?;

    let mut db = open_database(params.db_path.as_ref())?;
    let outcome = process_match(&mut db, &match_name, &deliveries, &players, params.force)?;
    info!(match_name = %match_name, stored = outcome.stored, "processed match");

    if params.as_json {
        return print_json(&outcome.result.stats);
    }

    // tarpaulin::skip - console output
    if !outcome.stored {
        println!(
            "Result for {} already stored; pass --force to replace it",
            match_name
        );
    }

    let mut rows: Vec<_> = outcome.result.stats.iter().collect();
    rows.sort_by(|a, b| b.1.points.cmp(&a.1.points).then_with(|| a.0.cmp(b.0)));
    for (name, stats) in rows {
        let role = stats
            .role
            .map(|r| r.to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        println!(
            "{} ({}) runs {} wkts {} maidens {} catches {}{} {} pts",
            name,
            role,
            stats.runs,
            stats.wickets,
            stats.maidens,
            stats.catches,
            if stats.out { " [out]" } else { "" },
            stats.points,
        );
    }

    Ok(())
}
