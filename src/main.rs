//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use cricket_fantasy::{
    cli::{Commands, FantasyCli, MatchCmd, TeamCmd},
    commands::{
        add_team::{handle_add_team, AddTeamParams},
        list_teams::handle_list_teams,
        process_result::{handle_process_result, ProcessResultParams},
        team_result::{handle_team_result, TeamResultParams},
    },
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = FantasyCli::parse();
    init_logging(app.verbose)?;

    let db_path = app.db;

    match app.command {
        Commands::Team { cmd } => match cmd {
            TeamCmd::Add {
                name,
                players,
                captain,
                vice_captain,
                roster,
                refresh,
            } => handle_add_team(AddTeamParams {
                team_name: name,
                players,
                captain,
                vice_captain,
                roster,
                refresh,
                db_path,
            })
            .await
            .context("team was not added")?,

            TeamCmd::List { json } => handle_list_teams(db_path, json)
                .await
                .context("failed to list teams")?,
        },

        Commands::Match { cmd } => match cmd {
            MatchCmd::Process {
                match_name,
                roster,
                deliveries,
                force,
                json,
                refresh,
            } => handle_process_result(ProcessResultParams {
                match_name,
                roster,
                deliveries,
                refresh,
                force,
                as_json: json,
                db_path,
            })
            .await
            .context("failed to process match result")?,

            MatchCmd::Results { match_name, json } => handle_team_result(TeamResultParams {
                match_name,
                as_json: json,
                db_path,
            })
            .await
            .context("failed to compute team results")?,
        },
    }

    Ok(())
}
