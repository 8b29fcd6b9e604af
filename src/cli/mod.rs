//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cricket::DataSource;
use types::MatchName;

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// Submit a fantasy team of eleven players.
    ///
    /// The team is checked against the match roster (size, role balance,
    /// captaincy) before anything is stored.
    Add {
        /// Unique team name.
        #[clap(long)]
        name: String,

        /// Player name (repeat eleven times): `-p "V Kohli" -p "MS Dhoni"`.
        #[clap(short = 'p', long = "player")]
        players: Vec<String>,

        /// Captain (earns double points).
        #[clap(long, short)]
        captain: String,

        /// Vice-captain (earns 1.5x points).
        #[clap(long)]
        vice_captain: String,

        /// Roster file path or http(s) URL.
        #[clap(long, short)]
        roster: DataSource,

        /// Force refresh of a remote roster, overwriting the cache.
        #[clap(long)]
        refresh: bool,
    },

    /// List submitted teams and their latest totals.
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum MatchCmd {
    /// Score a match from its ball-by-ball deliveries and store the player table.
    Process {
        /// Match name (or set `CRICKET_FANTASY_MATCH` env var).
        #[clap(long = "match", short)]
        match_name: Option<MatchName>,

        /// Roster file path or http(s) URL.
        #[clap(long, short)]
        roster: DataSource,

        /// Deliveries file path or http(s) URL.
        #[clap(long, short)]
        deliveries: DataSource,

        /// Replace an already stored result for this match.
        #[clap(long)]
        force: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Force refresh of remote sources, overwriting the cache.
        #[clap(long)]
        refresh: bool,
    },

    /// Total every team against a processed match, store the scores and rank.
    Results {
        /// Match name (or set `CRICKET_FANTASY_MATCH` env var).
        #[clap(long = "match", short)]
        match_name: Option<MatchName>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "cricket-fantasy", about = "Cricket fantasy league backend")]
pub struct FantasyCli {
    /// Database file (or set `CRICKET_FANTASY_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log at debug level.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage fantasy teams
    Team {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },

    /// Score matches and rank teams
    Match {
        #[clap(subcommand)]
        cmd: MatchCmd,
    },
}
