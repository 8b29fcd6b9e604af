//! Cricket player roles and utilities.

use crate::error::FantasyError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Playing role of a rostered cricketer.
///
/// Roles drive two rules: team submissions must field between one and eight
/// players of every role, and only batting roles (batter, wicket-keeper,
/// all-rounder) are penalised for getting out on a duck.
///
/// # Examples
///
/// ```rust
/// use cricket_fantasy::Role;
///
/// let role: Role = "ALL-ROUNDER".parse().unwrap();
/// assert_eq!(role, Role::AllRounder);
/// assert_eq!(role.to_string(), "All-Rounder");
/// assert!(role.bats());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    WicketKeeper,
    Batter,
    AllRounder,
    Bowler,
}

impl Role {
    /// Every role, in the order used for role-count reports.
    pub const ALL: [Role; 4] = [
        Role::WicketKeeper,
        Role::Batter,
        Role::AllRounder,
        Role::Bowler,
    ];

    /// Whether a duck dismissal costs this role points.
    pub fn bats(&self) -> bool {
        matches!(self, Role::Batter | Role::WicketKeeper | Role::AllRounder)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::WicketKeeper => "Wicket-Keeper",
            Role::Batter => "Batter",
            Role::AllRounder => "All-Rounder",
            Role::Bowler => "Bowler",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Role {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "WICKETKEEPER" | "WK" | "KEEPER" => Ok(Role::WicketKeeper),
            "BATTER" | "BATSMAN" | "BAT" => Ok(Role::Batter),
            "ALLROUNDER" | "AR" => Ok(Role::AllRounder),
            "BOWLER" | "BOWL" => Ok(Role::Bowler),
            _ => Err(FantasyError::InvalidRole {
                role: s.to_string(),
            }),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
