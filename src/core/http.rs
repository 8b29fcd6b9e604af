//! HTTP utilities for fetching remote data sources

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;

/// Bearer token for private data hosts.
pub const SOURCE_TOKEN_ENV_VAR: &str = "CRICKET_FANTASY_SOURCE_TOKEN";

/// Build request headers, adding an `Authorization` header when
/// `CRICKET_FANTASY_SOURCE_TOKEN` is set.
pub fn source_header_map() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Ok(token) = std::env::var(SOURCE_TOKEN_ENV_VAR) {
        if !token.trim().is_empty() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token.trim())).map_err(
                |e| crate::FantasyError::DataSource {
                    message: format!("invalid {} value: {}", SOURCE_TOKEN_ENV_VAR, e),
                },
            )?;
            h.insert(AUTHORIZATION, value);
        }
    }
    Ok(h)
}

/// GET a document and return its body.
pub async fn fetch_text(url: &str) -> Result<String> {
    let client = Client::new();
    let body = client
        .get(url)
        .headers(source_header_map()?)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(body)
}
