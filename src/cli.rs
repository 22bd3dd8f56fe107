//! Command-line interface definitions for News Keywords.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every path has a default, so running a subcommand with no flags uses the
//! conventional file layout.

use crate::api::DigestConfig;
use crate::articles::keywords::DEFAULT_KEYWORD_COUNT;
use crate::batch::BatchConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the News Keywords application.
///
/// # Examples
///
/// ```sh
/// # Summarize ../sample_news_articles/*.txt into news_data.csv
/// news_keywords process
///
/// # Custom input and output locations
/// news_keywords process -a ./articles -o ./out/summary.csv
///
/// # Render a NewsAPI digest using the key stored in key.md
/// news_keywords digest -q "solar power"
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract titles, dates and keywords from article files into a CSV
    Process(ProcessArgs),
    /// Fetch articles from NewsAPI and write a Markdown digest
    Digest(DigestArgs),
}

#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Directory containing `*.txt` article files
    #[arg(short, long, default_value = "../sample_news_articles")]
    pub articles_dir: PathBuf,

    /// Output path for the summary CSV
    #[arg(short, long, default_value = "news_data.csv")]
    pub output: PathBuf,

    /// Keywords to extract per article (the CSV keeps the top three)
    #[arg(short, long, default_value_t = DEFAULT_KEYWORD_COUNT)]
    pub keywords: usize,

    /// Skip printing the preview after writing the CSV
    #[arg(long)]
    pub no_preview: bool,
}

impl ProcessArgs {
    pub fn batch_config(&self) -> BatchConfig {
        BatchConfig {
            articles_dir: self.articles_dir.clone(),
            output_csv: self.output.clone(),
            keyword_count: self.keywords,
        }
    }
}

#[derive(Args, Debug)]
pub struct DigestArgs {
    /// File holding the NewsAPI key
    #[arg(long, default_value = "key.md")]
    pub key_file: PathBuf,

    /// NewsAPI key; takes precedence over --key-file
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output path for the Markdown digest
    #[arg(short, long, default_value = "readme.md")]
    pub output: PathBuf,

    /// Search query
    #[arg(short, long, default_value = "news")]
    pub query: String,

    /// Number of articles to request
    #[arg(long, default_value_t = 3)]
    pub page_size: u32,
}

impl DigestArgs {
    pub fn digest_config(&self) -> DigestConfig {
        DigestConfig {
            query: self.query.clone(),
            page_size: self.page_size,
            output: self.output.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_defaults() {
        let cli = Cli::parse_from(["news_keywords", "process"]);
        let Command::Process(args) = cli.command else {
            panic!("expected process subcommand");
        };

        let config = args.batch_config();
        let defaults = BatchConfig::default();
        assert_eq!(config.articles_dir, defaults.articles_dir);
        assert_eq!(config.output_csv, defaults.output_csv);
        assert_eq!(config.keyword_count, 3);
        assert!(!args.no_preview);
    }

    #[test]
    fn test_process_short_flags() {
        let cli = Cli::parse_from([
            "news_keywords",
            "process",
            "-a",
            "/tmp/articles",
            "-o",
            "/tmp/out.csv",
            "-k",
            "5",
            "--no-preview",
        ]);
        let Command::Process(args) = cli.command else {
            panic!("expected process subcommand");
        };

        assert_eq!(args.articles_dir, PathBuf::from("/tmp/articles"));
        assert_eq!(args.output, PathBuf::from("/tmp/out.csv"));
        assert_eq!(args.keywords, 5);
        assert!(args.no_preview);
    }

    #[test]
    fn test_digest_flags() {
        let cli = Cli::parse_from([
            "news_keywords",
            "digest",
            "--key-file",
            "secrets/key.md",
            "-q",
            "solar power",
            "--page-size",
            "10",
        ]);
        let Command::Digest(args) = cli.command else {
            panic!("expected digest subcommand");
        };

        assert_eq!(args.key_file, PathBuf::from("secrets/key.md"));
        let config = args.digest_config();
        assert_eq!(config.query, "solar power");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.output, PathBuf::from("readme.md"));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["news_keywords"]).is_err());
    }
}
