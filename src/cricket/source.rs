//! Roster and delivery data sources.
//!
//! A source is either a local JSON file or an `http(s)://` URL. Remote
//! documents are cached on disk and reused until a refresh is requested.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, info, warn};

use crate::core::{fetch_text, source_cache_path, try_read_to_string, write_string};
use crate::cricket::types::{Delivery, Player};
use crate::error::{FantasyError, Result};

/// Where a roster or delivery document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}

impl FromStr for DataSource {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FantasyError::DataSource {
                message: "empty data source".to_string(),
            });
        }
        let lower = s.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(DataSource::Url(s.to_string()))
        } else {
            Ok(DataSource::File(PathBuf::from(s)))
        }
    }
}

/// Documents are either a bare list or a list wrapped in an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListDocument<T> {
    Bare(Vec<T>),
    Roster { players: Vec<T> },
    Match { deliveries: Vec<T> },
}

impl<T> ListDocument<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            ListDocument::Bare(items) => items,
            ListDocument::Roster { players } => players,
            ListDocument::Match { deliveries } => deliveries,
        }
    }
}

/// Read a source document as text. Remote documents come from the cache
/// unless `refresh` is set or nothing is cached yet.
pub async fn read_source(source: &DataSource, kind: &str, refresh: bool) -> Result<String> {
    match source {
        DataSource::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
            FantasyError::DataSource {
                message: format!("cannot read {} from {}: {}", kind, path.display(), e),
            }
        }),
        DataSource::Url(url) => {
            let path = source_cache_path(kind, url);

            if !refresh {
                if let Some(cached) = try_read_to_string(&path) {
                    debug!(kind, path = %path.display(), "using cached source");
                    return Ok(cached);
                }
            }

            info!(kind, url = %url, "fetching source");
            let body = fetch_text(url).await?;
            if let Err(e) = write_string(&path, &body) {
                warn!(kind, path = %path.display(), error = %e, "could not cache source");
            }
            Ok(body)
        }
    }
}

fn parse_list<T: DeserializeOwned>(source: &DataSource, kind: &str, text: &str) -> Result<Vec<T>> {
    let doc: ListDocument<T> =
        serde_json::from_str(text).map_err(|e| FantasyError::DataSource {
            message: format!("cannot parse {} from {}: {}", kind, source, e),
        })?;
    Ok(doc.into_items())
}

/// Load the player roster.
pub async fn load_roster(source: &DataSource, refresh: bool) -> Result<Vec<Player>> {
    let text = read_source(source, "roster", refresh).await?;
    let players: Vec<Player> = parse_list(source, "roster", &text)?;
    info!(players = players.len(), source = %source, "loaded roster");
    Ok(players)
}

/// Load the ordered deliveries of a match.
pub async fn load_deliveries(source: &DataSource, refresh: bool) -> Result<Vec<Delivery>> {
    let text = read_source(source, "deliveries", refresh).await?;
    let deliveries: Vec<Delivery> = parse_list(source, "deliveries", &text)?;
    info!(deliveries = deliveries.len(), source = %source, "loaded deliveries");
    Ok(deliveries)
}
