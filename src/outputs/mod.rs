//! Output generation for CSV summaries, console previews and Markdown digests.
//!
//! # Submodules
//!
//! - [`summary`]: Writes and reads the per-article summary CSV
//! - [`preview`]: Formats summary rows for the terminal
//! - [`markdown`]: Renders NewsAPI articles into the digest Markdown file
//!
//! # Output Structure
//!
//! ```text
//! news_data.csv   # process: one row per article file
//! readme.md       # digest: one section per NewsAPI article
//! ```

pub mod markdown;
pub mod preview;
pub mod summary;
