//! Data models for parsed articles, summary rows and NewsAPI digests.
//!
//! This module defines the core data structures used throughout the application:
//! - [`ArticleRecord`]: Fields parsed out of one tagged article file
//! - [`SummaryRow`]: One flat CSV record per processed article
//! - [`DigestResponse`] / [`DigestArticle`]: The NewsAPI `everything` payload
//!
//! The digest models mirror the camelCase JSON returned by NewsAPI, so they
//! rename fields through serde instead of using non-snake-case identifiers.

use serde::{Deserialize, Serialize};

/// A news article as read from a tagged plain-text file.
///
/// Missing tags degrade to empty strings rather than errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleRecord {
    /// Text following the first `Title:` line.
    pub title: String,
    /// Text following the first `Published:` line.
    pub date: String,
    /// Everything from the first `Content:` line onward, trimmed.
    pub content: String,
}

/// One row of the summary CSV.
///
/// Field order here defines the CSV header:
/// `filename,title,date,keyword1,keyword2,keyword3`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SummaryRow {
    pub filename: String,
    pub title: String,
    pub date: String,
    pub keyword1: String,
    pub keyword2: String,
    pub keyword3: String,
}

impl SummaryRow {
    /// Build a row from a parsed article and its ranked keywords.
    ///
    /// Keyword slots beyond the end of `keywords` are left empty; keywords
    /// past the third are ignored.
    pub fn new(filename: impl Into<String>, article: ArticleRecord, keywords: &[String]) -> Self {
        let slot = |i: usize| keywords.get(i).cloned().unwrap_or_default();
        Self {
            filename: filename.into(),
            title: article.title,
            date: article.date,
            keyword1: slot(0),
            keyword2: slot(1),
            keyword3: slot(2),
        }
    }

    /// The three keyword slots in rank order.
    pub fn keywords(&self) -> [&str; 3] {
        [&self.keyword1, &self.keyword2, &self.keyword3]
    }
}

/// Top-level NewsAPI response body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Vec<DigestArticle>,
}

/// A single article returned by NewsAPI. Any field may be absent or null.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub source: Option<DigestSource>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl DigestArticle {
    /// The publishing outlet's display name, if NewsAPI supplied one.
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.name.as_deref())
    }
}

/// The `source` object nested inside a [`DigestArticle`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DigestSource {
    #[serde(default)]
    pub name: Option<String>,
}
