//! ID types for matches and fantasy teams.

use crate::error::{FantasyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for match identifiers.
///
/// Every scoring, persistence and ranking operation is keyed by one of these,
/// so a match name can never be confused with a team or player name.
///
/// # Examples
///
/// ```rust
/// use cricket_fantasy::MatchName;
///
/// let name = MatchName::new("CSKvRR");
/// assert_eq!(name.as_str(), "CSKvRR");
/// assert_eq!(name.to_string(), "CSKvRR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchName(pub String);

impl MatchName {
    /// Create a new MatchName.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the underlying name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatchName {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FantasyError::MissingMatchName {
                env_var: crate::MATCH_NAME_ENV_VAR.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Type-safe wrapper for stored team row IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub i64);

impl TeamId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
