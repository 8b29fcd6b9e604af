//! Cricket match data: roster and delivery records, their sources, and the
//! scoring engine that turns deliveries into fantasy points.

pub mod compute;
pub mod source;
pub mod types;

pub use compute::{compute_match_stats, compute_match_stats_with, ScoringRules};
pub use source::{load_deliveries, load_roster, DataSource};
pub use types::{Delivery, MatchStats, Player, PlayerMatchStats, Roster, WicketKind};
