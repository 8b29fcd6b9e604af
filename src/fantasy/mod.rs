//! Fantasy teams: submission rules, per-match team totals and the leaderboard.

pub mod aggregate;
pub mod ranking;
pub mod team;

pub use aggregate::{aggregate_teams, score_team};
pub use ranking::{rank, Leaderboard, TeamStanding};
pub use team::{validate_team, Team};
