//! Cricket Fantasy League Backend
//!
//! Turns raw ball-by-ball match data into fantasy points, totals user-built
//! teams against those points and picks the winners.
//!
//! ## Features
//!
//! - **Team Submission**: Eleven-player teams validated against the match roster
//! - **Scoring Engine**: Runs, boundaries, wickets, maidens, catches, milestones and ducks
//! - **Team Aggregation**: Captain (2x) and vice-captain (1.5x) multipliers
//! - **Ranking**: Leaderboard with ties at the top reported as joint winners
//! - **Database Storage**: Teams and match results persisted in SQLite
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cricket_fantasy::{
//!     commands::{process_result::process_match, team_result::team_results},
//!     storage::FantasyDatabase,
//!     MatchName,
//! };
//!
//! # fn example(
//! #     deliveries: Vec<cricket_fantasy::cricket::Delivery>,
//! #     players: Vec<cricket_fantasy::cricket::Player>,
//! # ) -> cricket_fantasy::Result<()> {
//! let mut db = FantasyDatabase::new()?;
//! let match_name = MatchName::new("CSKvRR");
//!
//! process_match(&mut db, &match_name, &deliveries, &players, false)?;
//! let board = team_results(&mut db, &match_name)?;
//! println!("winners: {}", board.winners.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export CRICKET_FANTASY_MATCH=CSKvRR
//! export CRICKET_FANTASY_DB=/tmp/fantasy.db
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod cricket;
pub mod error;
pub mod fantasy;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{MatchName, Role, TeamId};
pub use error::{FantasyError, Result};

pub const MATCH_NAME_ENV_VAR: &str = "CRICKET_FANTASY_MATCH";
pub const DB_PATH_ENV_VAR: &str = "CRICKET_FANTASY_DB";
