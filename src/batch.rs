//! Batch processing of a directory of article files.
//!
//! Every `*.txt` file in the input directory becomes exactly one
//! [`SummaryRow`], in lexicographic file-name order. Rows are collected in
//! memory and written once at the end, so an unreadable file aborts the run
//! before any CSV is produced.

use crate::articles::keywords::{DEFAULT_KEYWORD_COUNT, StopWords, extract_keywords};
use crate::articles::reader::read_article;
use crate::models::SummaryRow;
use crate::outputs::summary::write_summary;
use crate::utils::list_txt_files;
use std::error::Error;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Inputs for one batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory scanned (non-recursively) for `*.txt` article files.
    pub articles_dir: PathBuf,
    /// Destination of the summary CSV.
    pub output_csv: PathBuf,
    /// Keywords extracted per article.
    pub keyword_count: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            articles_dir: PathBuf::from("../sample_news_articles"),
            output_csv: PathBuf::from("news_data.csv"),
            keyword_count: DEFAULT_KEYWORD_COUNT,
        }
    }
}

/// What a batch run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// No `*.txt` files were found; nothing was written.
    NoArticles,
    /// The summary CSV was written with `rows` records.
    Written { path: PathBuf, rows: usize },
}

/// Read, analyze and summarize every article in `config.articles_dir`.
///
/// # Errors
///
/// Returns the first file-access or CSV error encountered. A missing or
/// empty input directory is not an error and yields
/// [`BatchOutcome::NoArticles`].
#[instrument(level = "info", skip_all, fields(dir = %config.articles_dir.display()))]
pub async fn process_articles(
    config: &BatchConfig,
    stop_words: &StopWords,
) -> Result<BatchOutcome, Box<dyn Error>> {
    let files = list_txt_files(&config.articles_dir).await?;

    if files.is_empty() {
        info!("No .txt files found in {}", config.articles_dir.display());
        return Ok(BatchOutcome::NoArticles);
    }

    info!("Found {} news articles to process", files.len());

    let mut rows = Vec::with_capacity(files.len());
    for path in &files {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!("Processing: {}", filename);

        let article = read_article(path).await?;
        let keywords = extract_keywords(&article.content, config.keyword_count, stop_words);
        debug!(%filename, ?keywords, "Extracted keywords");

        rows.push(SummaryRow::new(filename, article, &keywords));
    }

    write_summary(&config.output_csv, &rows).await?;

    info!("Results saved to: {}", config.output_csv.display());
    info!("Processed {} articles successfully!", rows.len());

    Ok(BatchOutcome::Written {
        path: config.output_csv.clone(),
        rows: rows.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outputs::summary::read_summary;
    use std::fs;

    fn config_for(dir: &std::path::Path) -> BatchConfig {
        BatchConfig {
            articles_dir: dir.join("articles"),
            output_csv: dir.join("out").join("news_data.csv"),
            keyword_count: DEFAULT_KEYWORD_COUNT,
        }
    }

    #[tokio::test]
    async fn test_one_row_per_file_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        fs::create_dir_all(&config.articles_dir).unwrap();

        fs::write(
            config.articles_dir.join("b.txt"),
            "Title: Fox story\nPublished: 2025-05-07\n\
             Content: The quick brown fox jumps over the lazy dog. Foxes are quick.\n",
        )
        .unwrap();
        fs::write(config.articles_dir.join("a.txt"), "Title: Hello\n").unwrap();
        fs::write(config.articles_dir.join("notes.md"), "Title: Ignored\n").unwrap();

        let outcome = process_articles(&config, StopWords::english()).await.unwrap();
        assert_eq!(
            outcome,
            BatchOutcome::Written {
                path: config.output_csv.clone(),
                rows: 2
            }
        );

        let rows = read_summary(&config.output_csv).await.unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].filename, "a.txt");
        assert_eq!(rows[0].title, "Hello");
        assert_eq!(rows[0].date, "");
        assert_eq!(rows[0].keywords(), ["", "", ""]);

        assert_eq!(rows[1].filename, "b.txt");
        assert_eq!(rows[1].title, "Fox story");
        assert_eq!(rows[1].date, "2025-05-07");
        assert_eq!(rows[1].keywords(), ["quick", "brown", "jumps"]);
    }

    #[tokio::test]
    async fn test_duplicate_articles_are_not_merged() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        fs::create_dir_all(&config.articles_dir).unwrap();
        for name in ["one.txt", "two.txt"] {
            fs::write(
                config.articles_dir.join(name),
                "Title: Harbor\nContent: Harbor reopened after repairs",
            )
            .unwrap();
        }

        process_articles(&config, StopWords::english()).await.unwrap();
        let rows = read_summary(&config.output_csv).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].filename, "one.txt");
        assert_eq!(rows[1].filename, "two.txt");
        assert_eq!(rows[0].keywords(), ["harbor", "reopened", "after"]);
        assert_eq!(rows[0].keywords(), rows[1].keywords());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlinked_article_gets_a_row() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        fs::create_dir_all(&config.articles_dir).unwrap();
        let shared = dir.path().join("shared_article");
        fs::write(&shared, "Title: Linked\nContent: Ferry schedule changes").unwrap();
        fs::write(config.articles_dir.join("a.txt"), "Title: Local\n").unwrap();
        std::os::unix::fs::symlink(&shared, config.articles_dir.join("b.txt")).unwrap();

        let outcome = process_articles(&config, StopWords::english()).await.unwrap();
        assert_eq!(
            outcome,
            BatchOutcome::Written {
                path: config.output_csv.clone(),
                rows: 2
            }
        );

        let rows = read_summary(&config.output_csv).await.unwrap();
        assert_eq!(rows[1].filename, "b.txt");
        assert_eq!(rows[1].title, "Linked");
        assert_eq!(rows[1].keywords(), ["ferry", "schedule", "changes"]);
    }

    #[tokio::test]
    async fn test_empty_directory_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        fs::create_dir_all(&config.articles_dir).unwrap();

        let outcome = process_articles(&config, StopWords::english()).await.unwrap();
        assert_eq!(outcome, BatchOutcome::NoArticles);
        assert!(!config.output_csv.exists());
    }

    #[tokio::test]
    async fn test_missing_directory_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());

        let outcome = process_articles(&config, StopWords::english()).await.unwrap();
        assert_eq!(outcome, BatchOutcome::NoArticles);
        assert!(!config.output_csv.exists());
    }

    #[tokio::test]
    async fn test_unreadable_file_aborts_batch() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        fs::create_dir_all(&config.articles_dir).unwrap();
        fs::write(config.articles_dir.join("a.txt"), "Title: Fine\n").unwrap();
        fs::write(config.articles_dir.join("b.txt"), [0xff, 0xfe, 0x00]).unwrap();

        let err = process_articles(&config, StopWords::english())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("b.txt"));
        assert!(!config.output_csv.exists());
    }

    #[tokio::test]
    async fn test_custom_keyword_count() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_for(dir.path());
        config.keyword_count = 1;
        fs::create_dir_all(&config.articles_dir).unwrap();
        fs::write(
            config.articles_dir.join("a.txt"),
            "Content: river river delta basin",
        )
        .unwrap();

        process_articles(&config, StopWords::english()).await.unwrap();
        let rows = read_summary(&config.output_csv).await.unwrap();
        assert_eq!(rows[0].keywords(), ["river", "", ""]);
    }
}
