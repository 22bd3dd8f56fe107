//! Tagged article file reader.
//!
//! Article files are plain UTF-8 text where a handful of line prefixes carry
//! structure:
//!
//! ```text
//! Title: Solar output hits record
//! Published: 2025-05-06
//! Content: Grid operators reported...
//! ...more body text...
//! ```
//!
//! Only the first `Title:` and `Published:` lines count. The first `Content:`
//! line starts the body, which runs to end of file.

use crate::models::ArticleRecord;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};

const TITLE_TAG: &str = "Title:";
const DATE_TAG: &str = "Published:";
const CONTENT_TAG: &str = "Content:";

/// Read and parse one article file.
///
/// # Errors
///
/// Returns an error naming the path if the file is missing, unreadable, or
/// not valid UTF-8. Missing tags inside the file are not errors.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn read_article(path: &Path) -> Result<ArticleRecord, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .await
        .map_err(|e| format!("failed to read article {}: {}", path.display(), e))?;
    let article = parse_article(&text);
    debug!(
        title = %article.title,
        date = %article.date,
        content_bytes = article.content.len(),
        "Parsed article"
    );
    Ok(article)
}

/// Parse the tagged article format out of an in-memory string.
pub fn parse_article(text: &str) -> ArticleRecord {
    let mut article = ArticleRecord::default();
    let mut title_seen = false;
    let mut date_seen = false;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if let Some(rest) = line.strip_prefix(TITLE_TAG) {
            if !title_seen {
                article.title = rest.trim().to_string();
                title_seen = true;
            }
        } else if let Some(rest) = line.strip_prefix(DATE_TAG) {
            if !date_seen {
                article.date = rest.trim().to_string();
                date_seen = true;
            }
        } else if line.starts_with(CONTENT_TAG) {
            article.content = text[offset + CONTENT_TAG.len()..].trim().to_string();
            break;
        }
        offset += line.len();
    }

    article
}
