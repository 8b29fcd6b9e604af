//! SQLite persistence for teams and match results
//!
//! - `models`: Records read from and written to the database
//! - `schema`: Connection setup and table definitions
//! - `queries`: Team submissions, team scores and match result operations

pub mod models;
pub mod queries;
pub mod schema;


pub use models::*;
pub use schema::FantasyDatabase;
