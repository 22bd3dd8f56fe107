//! Markdown rendering for the NewsAPI digest.
//!
//! The digest is a fixed heading structure followed by one `### Article N`
//! section per article, in the order NewsAPI returned them. Absent or null
//! fields render as `None`.

use crate::models::DigestArticle;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

const MISSING: &str = "None";

fn field(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

/// Render the full digest document.
pub fn render_digest(articles: &[DigestArticle]) -> String {
    let mut lines: Vec<String> = vec![
        "# NewsAPI Services Overview\n".to_string(),
        "This README includes sample news articles fetched from NewsAPI.\n".to_string(),
        "## Sample Articles\n".to_string(),
    ];

    for (i, article) in articles.iter().enumerate() {
        lines.push(format!("### Article {}\n", i + 1));
        lines.push(format!("- **Title:** {}", field(article.title.as_deref())));
        lines.push(format!("- **Source:** {}", field(article.source_name())));
        lines.push(format!("- **Author:** {}", field(article.author.as_deref())));
        lines.push(format!(
            "- **Published At:** {}",
            field(article.published_at.as_deref())
        ));
        lines.push(format!(
            "- **Description:** {}",
            field(article.description.as_deref())
        ));
        lines.push(format!("- **URL:** {}\n", field(article.url.as_deref())));
    }

    lines.join("\n")
}

/// Render the digest and write it to `path`.
#[instrument(level = "info", skip_all, fields(path = %path.display(), articles = articles.len()))]
pub async fn write_digest(path: &Path, articles: &[DigestArticle]) -> Result<(), Box<dyn Error>> {
    let md = render_digest(articles);
    fs::write(path, md).await?;
    info!("Wrote digest Markdown");
    Ok(())
}
