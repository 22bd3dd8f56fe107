//! NewsAPI client and digest generation.
//!
//! This module fetches articles from the NewsAPI `everything` endpoint and
//! hands them to the Markdown renderer. It performs exactly one request per
//! run; any transport failure or non-2xx status is returned to the caller.
//!
//! # Architecture
//!
//! - [`NewsSource`]: Trait for anything that can return a page of articles
//! - [`NewsApiClient`]: The `reqwest`-backed NewsAPI implementation
//! - [`generate_digest`]: Fetch, render and write the digest file

use crate::models::{DigestArticle, DigestResponse};
use crate::outputs::markdown::write_digest;
use crate::utils::truncate_for_log;
use reqwest::Client;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::fs;
use tracing::{error, info, instrument};
use url::Url;

/// NewsAPI search endpoint.
pub const NEWSAPI_URL: &str = "https://newsapi.org/v2/everything";

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait for a source of news articles.
///
/// The digest generator only depends on this trait, so tests can supply
/// canned articles without touching the network.
pub trait NewsSource {
    /// Fetch up to `page_size` articles matching `query`.
    async fn fetch(&self, query: &str, page_size: u32) -> Result<Vec<DigestArticle>, Box<dyn Error>>;
}

/// Client for the NewsAPI `everything` endpoint.
pub struct NewsApiClient {
    http: Client,
    endpoint: Url,
    api_key: String,
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl NewsApiClient {
    /// Create a client against the public NewsAPI endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Box<dyn Error>> {
        Self::with_endpoint(api_key, NEWSAPI_URL)
    }

    /// Create a client against an arbitrary endpoint.
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: &str) -> Result<Self, Box<dyn Error>> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            endpoint: Url::parse(endpoint)?,
            api_key: api_key.into(),
        })
    }

    /// Build the request URL with `q`, `apiKey` and `pageSize` parameters.
    pub fn request_url(&self, query: &str, page_size: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("apiKey", &self.api_key)
            .append_pair("pageSize", &page_size.to_string());
        url
    }
}

impl NewsSource for NewsApiClient {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, query: &str, page_size: u32) -> Result<Vec<DigestArticle>, Box<dyn Error>> {
        let t0 = Instant::now();
        let response = self
            .http
            .get(self.request_url(query, page_size))
            .send()
            .await
            // the URL carries the API key
            .map_err(|e| e.without_url())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                %status,
                elapsed_ms = t0.elapsed().as_millis(),
                body = %truncate_for_log(&body, 300),
                "NewsAPI request failed"
            );
            return Err(format!("NewsAPI returned {status}").into());
        }

        let body = response.text().await.map_err(|e| e.without_url())?;
        let payload: DigestResponse = match serde_json::from_str(&body) {
            Ok(payload) => payload,
            Err(e) => {
                error!(
                    error = %e,
                    body = %truncate_for_log(&body, 300),
                    "NewsAPI returned non-conforming JSON"
                );
                return Err(e.into());
            }
        };
        info!(
            status = payload.status.as_deref().unwrap_or("unknown"),
            total_results = payload.total_results.unwrap_or_default(),
            returned = payload.articles.len(),
            elapsed_ms = t0.elapsed().as_millis(),
            "Fetched NewsAPI articles"
        );
        Ok(payload.articles)
    }
}

/// Read an API key from a file, trimming surrounding whitespace.
///
/// # Errors
///
/// Fails if the file cannot be read or contains only whitespace.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn read_api_key(path: &Path) -> Result<String, Box<dyn Error>> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| format!("failed to read API key file {}: {}", path.display(), e))?;
    let key = raw.trim();
    if key.is_empty() {
        return Err(format!("API key file {} is empty", path.display()).into());
    }
    Ok(key.to_string())
}

/// Inputs for one digest run.
#[derive(Debug, Clone)]
pub struct DigestConfig {
    pub query: String,
    pub page_size: u32,
    pub output: PathBuf,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            query: "news".to_string(),
            page_size: 3,
            output: PathBuf::from("readme.md"),
        }
    }
}

/// Fetch articles from `source` and write the Markdown digest.
///
/// Returns the number of articles rendered.
#[instrument(level = "info", skip_all, fields(query = %config.query, page_size = config.page_size))]
pub async fn generate_digest<S: NewsSource>(
    source: &S,
    config: &DigestConfig,
) -> Result<usize, Box<dyn Error>> {
    let articles = source.fetch(&config.query, config.page_size).await?;
    write_digest(&config.output, &articles).await?;
    info!("README generated at {}", config.output.display());
    Ok(articles.len())
}
