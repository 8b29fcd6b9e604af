//! Type-safe wrappers and enums for cricket fantasy data.

pub mod ids;
pub mod role;

pub use ids::{MatchName, TeamId};
pub use role::Role;
