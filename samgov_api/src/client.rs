//! HTTP client for the sam.gov opportunities search API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{query::OpportunityQuery, types::SearchPage, Error};

/// Path of the search endpoint, relative to the base URL.
pub const SEARCH_PATH: &str = "/prod/opportunities/v1/search";

/// Per-request timeout used unless overridden with [`Client::with_timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// HTTP client for the sam.gov opportunities API.
///
/// Each request builds a fresh `reqwest::Client` with the configured
/// timeout. No retries are attempted.
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.sam.gov`.
    base_api_url: String,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production sam.gov API.
    pub fn new() -> Self {
        Self::with_base_url("https://api.sam.gov")
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replaces the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn get_url(&self, path: &str, query: &OpportunityQuery) -> Result<Url, Error> {
        let url = Url::parse(&format!("{}{}", self.base_api_url, path)).map_err(|e| {
            tracing::error!("Invalid search URL {}{}: {}", self.base_api_url, path, e);
            Error::InvalidUrl(e)
        })?;
        Ok(query.add_to_url(&url))
    }

    async fn get<T>(&self, path: &str, query: &OpportunityQuery) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path, query)?;
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(Error::Transport)?;

        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Search request failed: {}", e);
                Error::Transport(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read search response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Search returned status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|source| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to decode search page: {} | body: {}", source, snippet);
            Error::Decode {
                source,
                body: snippet,
            }
        })
    }

    /// Fetches one page of opportunities matching the given query.
    pub async fn search(&self, query: &OpportunityQuery) -> Result<SearchPage, Error> {
        self.get::<SearchPage>(SEARCH_PATH, query).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_body_untouched() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn truncate_long_body() {
        let body = "x".repeat(2500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = format!("{}{}", "x".repeat(1999), "é".repeat(10));
        let out = truncate_body(&body);
        assert!(out.starts_with(&"x".repeat(1999)));
        assert!(out.ends_with("...[truncated]"));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = Client::with_base_url("http://localhost:1234/");
        assert_eq!(client.base_url(), "http://localhost:1234");
        assert_eq!(client.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn timeout_override() {
        let client = Client::new().with_timeout(Duration::from_secs(15));
        assert_eq!(client.timeout(), Duration::from_secs(15));
    }
}
