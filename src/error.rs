//! Error types for the cricket fantasy backend

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FantasyError>;

#[derive(Error, Debug)]
pub enum FantasyError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Match name not provided and {env_var} environment variable not set")]
    MissingMatchName { env_var: String },

    #[error("Data source unavailable: {message}")]
    DataSource { message: String },

    #[error("Malformed delivery #{index}: {reason}")]
    MalformedDelivery { index: usize, reason: String },

    #[error("{reason}")]
    InvalidTeam { reason: String },

    #[error("Invalid role: {role}")]
    InvalidRole { role: String },

    #[error("No result recorded for match {match_name}")]
    MatchResultNotFound { match_name: String },

    #[error("Team not found: {name}")]
    TeamNotFound { name: String },

    #[error("Cannot rank an empty set of teams")]
    NoTeams,
}

impl FantasyError {
    /// Build a team rejection with a human readable reason.
    pub fn invalid_team(reason: impl Into<String>) -> Self {
        FantasyError::InvalidTeam {
            reason: reason.into(),
        }
    }

    /// True for rejections caused by the caller's input rather than the system.
    pub fn is_validation(&self) -> bool {
        matches!(self, FantasyError::InvalidTeam { .. })
    }
}
