//! Database schema and connection management

use crate::error::{FantasyError, Result};
use crate::DB_PATH_ENV_VAR;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Database connection for fantasy teams and match results.
///
/// One handle is opened per command and passed to every operation that needs
/// storage; nothing in the crate holds a global connection.
pub struct FantasyDatabase {
    pub(crate) conn: Connection,
}

impl FantasyDatabase {
    /// Open the database at its configured location and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;
        Self::open(&db_path)
    }

    /// Open (or create) a database file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "opening database");
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Fresh private database, used by tests and dry runs
    pub fn new_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file: `CRICKET_FANTASY_DB` if set,
    /// otherwise the platform data directory.
    pub fn database_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(DB_PATH_ENV_VAR) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path.trim()));
            }
        }
        let data_dir = dirs::data_dir().ok_or_else(|| FantasyError::DataSource {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("cricket-fantasy").join("fantasy.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Submitted fantasy teams; total_points is a decimal string once scored
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                team_id INTEGER PRIMARY KEY AUTOINCREMENT,
                team_name TEXT NOT NULL UNIQUE,
                captain TEXT NOT NULL,
                vice_captain TEXT NOT NULL,
                total_points TEXT,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        // Team members in submission order
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS team_players (
                team_id INTEGER NOT NULL,
                slot INTEGER NOT NULL,
                player_name TEXT NOT NULL,
                points TEXT,
                PRIMARY KEY (team_id, slot),
                UNIQUE (team_id, player_name),
                FOREIGN KEY (team_id) REFERENCES teams(team_id) ON DELETE CASCADE
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS match_results (
                match_name TEXT PRIMARY KEY,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS player_match_stats (
                match_name TEXT NOT NULL,
                player_name TEXT NOT NULL,
                role TEXT,
                runs INTEGER NOT NULL,
                wickets INTEGER NOT NULL,
                maidens INTEGER NOT NULL,
                catches INTEGER NOT NULL,
                out INTEGER NOT NULL,
                points INTEGER NOT NULL,
                PRIMARY KEY (match_name, player_name),
                FOREIGN KEY (match_name) REFERENCES match_results(match_name) ON DELETE CASCADE
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_team_players_team
             ON team_players(team_id, slot)",
            [],
        )?;

        Ok(())
    }
}
