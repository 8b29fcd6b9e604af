//! Core utilities for the cricket fantasy backend
//!
//! This module consolidates the plumbing used to reach data sources:
//! - `cache`: File system caching of fetched documents
//! - `http`: Fetching remote documents

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{source_cache_path, try_read_to_string, write_string};
pub use http::fetch_text;
