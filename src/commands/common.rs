//! Helpers shared across commands.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::{storage::FantasyDatabase, Result};

/// Open the database at `path`, or at the configured default location.
pub fn open_database(path: Option<&PathBuf>) -> Result<FantasyDatabase> {
    match path {
        Some(p) => FantasyDatabase::open(p),
        None => {
            let default = FantasyDatabase::database_path()?;
            debug!(path = %default.display(), "using default database");
            FantasyDatabase::open(&default)
        }
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?); // tarpaulin::skip
    Ok(())
}
