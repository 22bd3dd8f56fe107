//! # News Keywords
//!
//! Two small news utilities behind one binary:
//!
//! - `process` reads tagged article files (`Title:`, `Published:`,
//!   `Content:`), ranks the three most frequent qualifying words in each,
//!   writes a summary CSV and prints a preview of it.
//! - `digest` fetches a page of articles from NewsAPI and renders them into
//!   a Markdown file.
//!
//! ## Usage
//!
//! ```sh
//! news_keywords process -a ../sample_news_articles -o news_data.csv
//! news_keywords digest --key-file key.md -o readme.md
//! ```
//!
//! ## Architecture
//!
//! The `process` pipeline is strictly sequential:
//! 1. **Discovery**: List `*.txt` files in name order
//! 2. **Parsing**: Read each file into an `ArticleRecord`
//! 3. **Ranking**: Extract keywords from the article body
//! 4. **Output**: Write every row to CSV once, then read it back for the preview

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod articles;
mod batch;
mod cli;
mod models;
mod outputs;
mod utils;

use api::{NewsApiClient, generate_digest, read_api_key};
use articles::keywords::StopWords;
use batch::{BatchOutcome, process_articles};
use cli::{Cli, Command, DigestArgs, ProcessArgs};
use outputs::{preview, summary};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();

    let result = match &args.command {
        Command::Process(process) => run_process(process).await,
        Command::Digest(digest) => run_digest(digest).await,
    };

    let elapsed = start_time.elapsed();
    match &result {
        Ok(()) => info!(
            ?elapsed,
            secs = elapsed.as_secs(),
            millis = elapsed.subsec_millis(),
            "Execution complete"
        ),
        Err(e) => error!(?elapsed, error = %e, "Execution failed"),
    }
    result
}

async fn run_process(args: &ProcessArgs) -> Result<(), Box<dyn Error>> {
    let config = args.batch_config();
    debug!(?config, no_preview = args.no_preview, "Parsed process arguments");

    match process_articles(&config, StopWords::english()).await? {
        BatchOutcome::NoArticles => Ok(()),
        BatchOutcome::Written { path, rows } => {
            debug!(path = %path.display(), rows, "Summary ready");
            if !args.no_preview {
                let rows = summary::read_summary(&path).await?;
                println!();
                print!("{}", preview::render_preview(&rows));
            }
            Ok(())
        }
    }
}

async fn run_digest(args: &DigestArgs) -> Result<(), Box<dyn Error>> {
    debug!(
        key_file = %args.key_file.display(),
        key_from_env = args.api_key.is_some(),
        query = %args.query,
        "Parsed digest arguments"
    );
    let api_key = match &args.api_key {
        Some(key) if !key.trim().is_empty() => key.trim().to_string(),
        _ => read_api_key(&args.key_file).await?,
    };

    let client = NewsApiClient::new(api_key)?;
    generate_digest(&client, &args.digest_config()).await?;
    Ok(())
}
